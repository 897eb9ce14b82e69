//! Build errors for calculator and keymap builders.

use crate::builder::keymap::{Key, KeyAction};
use thiserror::Error;

/// Errors that can occur when building calculators and keymaps.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Key {key} is bound to both {first} and {second}. Call .unbind(key) first")]
    ConflictingBinding {
        key: Key,
        first: KeyAction,
        second: KeyAction,
    },

    #[error("Initial input '{input}' is neither a partial nor a complete number")]
    InvalidInitialInput { input: String },

    #[error("Journal capacity must be at least 1")]
    ZeroJournalCapacity,
}
