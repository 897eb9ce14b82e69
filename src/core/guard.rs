//! Guard predicates for controlling state transitions.
//!
//! Guards are pure checks that decide whether a transition may run. A
//! failed guard never raises an error; it yields a [`Rejection`] that
//! explains why the request left the state unchanged.
//!
//! Guards are evaluated together with [`enforce_all`], which reports every
//! failed precondition rather than stopping at the first one.

use super::number::{is_accepted_input, is_complete_number};
use super::state::CalcState;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Why a transition request was ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Input '{input}' is not a complete number")]
    IncompleteInput { input: String },

    #[error("No pending action to resolve")]
    NoPendingAction,

    #[error("Text '{text}' is neither a partial nor a complete number")]
    InvalidText { text: String },
}

/// Signature of a guard check over the current state and a candidate text.
pub type GuardCheck = fn(&CalcState, &str) -> Result<(), Rejection>;

/// Named pure precondition for a transition.
///
/// The text argument is whatever the transition consumes: the current
/// input for operator and compute requests, the candidate text for input
/// updates.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalcState, Guard};
///
/// assert!(Guard::COMPLETE_INPUT.check(&CalcState::Idle, "42"));
/// assert!(!Guard::COMPLETE_INPUT.check(&CalcState::Idle, "42."));
/// assert!(!Guard::PENDING_ACTION.check(&CalcState::Idle, "42"));
/// ```
#[derive(Clone, Copy)]
pub struct Guard {
    name: &'static str,
    check: GuardCheck,
}

impl Guard {
    /// Text must be a complete number.
    pub const COMPLETE_INPUT: Guard = Guard::new("complete_input", complete_input);

    /// A pending action must be held.
    pub const PENDING_ACTION: Guard = Guard::new("pending_action", pending_action);

    /// Text must be a partial or complete number.
    pub const ACCEPTED_TEXT: Guard = Guard::new("accepted_text", accepted_text);

    /// Create a guard from a pure check function.
    pub const fn new(name: &'static str, check: GuardCheck) -> Self {
        Guard { name, check }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, state: &CalcState, text: &str) -> bool {
        (self.check)(state, text).is_ok()
    }

    /// Evaluate the guard, keeping the rejection on failure.
    pub fn enforce(&self, state: &CalcState, text: &str) -> Validation<(), NonEmptyVec<Rejection>> {
        match (self.check)(state, text) {
            Ok(()) => Validation::success(()),
            Err(rejection) => Validation::fail(rejection),
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}

/// Enforce every guard, accumulating ALL rejections.
///
/// Returns `Validation::Success(())` if every guard passes.
///
/// # Example
///
/// ```rust
/// use tally::core::{enforce_all, CalcState, Guard};
/// use stillwater::validation::Validation;
///
/// let result = enforce_all(&[Guard::PENDING_ACTION, Guard::COMPLETE_INPUT], &CalcState::Idle, "");
///
/// match result {
///     Validation::Failure(rejections) => assert_eq!(rejections.len(), 2),
///     Validation::Success(_) => panic!("Expected rejections"),
/// }
/// ```
pub fn enforce_all(
    guards: &[Guard],
    state: &CalcState,
    text: &str,
) -> Validation<(), NonEmptyVec<Rejection>> {
    let checks: Vec<Validation<(), NonEmptyVec<Rejection>>> = guards
        .iter()
        .map(|guard| guard.enforce(state, text))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn complete_input(_state: &CalcState, text: &str) -> Result<(), Rejection> {
    if is_complete_number(text) {
        Ok(())
    } else {
        Err(Rejection::IncompleteInput {
            input: text.to_string(),
        })
    }
}

fn pending_action(state: &CalcState, _text: &str) -> Result<(), Rejection> {
    if state.is_pending() {
        Ok(())
    } else {
        Err(Rejection::NoPendingAction)
    }
}

fn accepted_text(_state: &CalcState, text: &str) -> Result<(), Rejection> {
    if is_accepted_input(text) {
        Ok(())
    } else {
        Err(Rejection::InvalidText {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BinaryOp;

    fn pending() -> CalcState {
        CalcState::Idle.chain(BinaryOp::Add, 1.0)
    }

    #[test]
    fn complete_input_guard_checks_text() {
        assert!(Guard::COMPLETE_INPUT.check(&CalcState::Idle, "3.5"));
        assert!(!Guard::COMPLETE_INPUT.check(&CalcState::Idle, "3."));
        assert!(!Guard::COMPLETE_INPUT.check(&pending(), ""));
    }

    #[test]
    fn pending_action_guard_checks_state() {
        assert!(Guard::PENDING_ACTION.check(&pending(), ""));
        assert!(!Guard::PENDING_ACTION.check(&CalcState::Idle, "3"));
    }

    #[test]
    fn accepted_text_guard_allows_partial_numbers() {
        assert!(Guard::ACCEPTED_TEXT.check(&CalcState::Idle, "-"));
        assert!(Guard::ACCEPTED_TEXT.check(&CalcState::Idle, "3.5e+"));
        assert!(!Guard::ACCEPTED_TEXT.check(&CalcState::Idle, "5-"));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = pending();
        let result1 = Guard::COMPLETE_INPUT.check(&state, "12");
        let result2 = Guard::COMPLETE_INPUT.check(&state, "12");

        assert_eq!(result1, result2);
    }

    #[test]
    fn custom_guard_can_be_built() {
        fn short_input(_state: &CalcState, text: &str) -> Result<(), Rejection> {
            if text.len() <= 3 {
                Ok(())
            } else {
                Err(Rejection::InvalidText {
                    text: text.to_string(),
                })
            }
        }

        let guard = Guard::new("short_input", short_input);
        assert_eq!(guard.name(), "short_input");
        assert!(guard.check(&CalcState::Idle, "123"));
        assert!(!guard.check(&CalcState::Idle, "1234"));
    }

    #[test]
    fn enforcement_accumulates_all_rejections() {
        let result = enforce_all(
            &[Guard::PENDING_ACTION, Guard::COMPLETE_INPUT],
            &CalcState::Idle,
            "4.",
        );

        match result {
            Validation::Failure(rejections) => {
                assert_eq!(rejections.len(), 2);
                assert!(rejections
                    .iter()
                    .any(|r| matches!(r, Rejection::NoPendingAction)));
                assert!(rejections
                    .iter()
                    .any(|r| matches!(r, Rejection::IncompleteInput { input } if input == "4.")));
            }
            Validation::Success(_) => panic!("Expected rejections, got success"),
        }
    }

    #[test]
    fn enforcement_succeeds_when_all_guards_pass() {
        let result = enforce_all(
            &[Guard::PENDING_ACTION, Guard::COMPLETE_INPUT],
            &pending(),
            "4",
        );
        assert!(result.is_success());
    }

    #[test]
    fn rejection_messages_name_the_text() {
        let rejection = Rejection::InvalidText {
            text: "5-".to_string(),
        };
        assert_eq!(
            rejection.to_string(),
            "Text '5-' is neither a partial nor a complete number"
        );
    }
}
