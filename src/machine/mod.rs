//! The calculator state machine: the imperative shell around the pure core.
//!
//! A [`Calculator`] owns the input text and the current [`CalcState`] and
//! exposes one synchronous method per user event. Each call runs to
//! completion before the next; there is no async work and no shared state
//! between instances.
//!
//! # Key Concepts
//!
//! - **Transitions**: `update_input`, `apply_operator`, `compute_result`
//! - **Guards**: preconditions enforced before a transition commits
//! - **Steps**: every request reports whether it applied or why it was ignored
//!
//! [`CalcState`]: crate::core::CalcState

mod calculator;
mod snapshot;
mod step;

pub use calculator::Calculator;
pub use snapshot::Snapshot;
pub use step::{KeyOutcome, Step};
