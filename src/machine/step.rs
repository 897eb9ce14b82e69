//! Outcomes of transition requests.

use crate::core::{CalcState, Rejection};

/// Result of one transition request.
///
/// `Ignored` is not an error: the request was a no-op and the calculator is
/// exactly as it was. Callers are free to discard the value.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// The transition ran; holds the state afterwards
    Applied(CalcState),

    /// Every precondition that failed
    Ignored(Vec<Rejection>),
}

impl Step {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }

    /// Rejections of an ignored step, empty when applied.
    pub fn rejections(&self) -> &[Rejection] {
        match self {
            Self::Applied(_) => &[],
            Self::Ignored(rejections) => rejections,
        }
    }
}

/// Whether the core handled a key press.
///
/// `PassThrough` tells the UI layer to let the key reach the text field
/// (a `-` typed into an empty input becomes a sign, not an operator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    PassThrough,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_step_has_no_rejections() {
        let step = Step::Applied(CalcState::Idle);
        assert!(step.is_applied());
        assert!(!step.is_ignored());
        assert!(step.rejections().is_empty());
    }

    #[test]
    fn ignored_step_exposes_rejections() {
        let step = Step::Ignored(vec![Rejection::NoPendingAction]);
        assert!(step.is_ignored());
        assert_eq!(step.rejections(), &[Rejection::NoPendingAction]);
    }
}
