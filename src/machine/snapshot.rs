//! Read-model handed to the UI layer for rendering.

use crate::core::PendingAction;
use serde::Serialize;

/// Everything a renderer needs to draw the widget.
///
/// `operators_enabled` mirrors the input's validity so operator buttons can
/// be disabled and the field highlighted; `compute_enabled` additionally
/// requires a pending action.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub input_text: String,
    pub is_valid: bool,
    pub state: &'static str,
    pub pending: Option<PendingAction>,
    pub operators_enabled: bool,
    pub compute_enabled: bool,
}
