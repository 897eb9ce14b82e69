//! Calculator state.
//!
//! The machine is either idle or holds exactly one pending action: the
//! accumulated left operand and the operator waiting for a right operand.

use super::operator::BinaryOp;
use serde::{Deserialize, Serialize};

/// The remembered left operand and the operator awaiting a second operand.
///
/// # Example
///
/// ```rust
/// use tally::core::{BinaryOp, PendingAction};
///
/// let pending = PendingAction { value: 3.0, operator: BinaryOp::Add };
/// assert_eq!(pending.resolve(4.0), 7.0);
/// ```
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PendingAction {
    /// Accumulated left-hand value
    pub value: f64,
    /// Operator applied once the right operand is ready
    pub operator: BinaryOp,
}

impl PendingAction {
    /// Apply the stored operator to `(value, rhs)`.
    pub fn resolve(&self, rhs: f64) -> f64 {
        self.operator.apply(self.value, rhs)
    }
}

/// Calculator state.
///
/// All methods are pure. A pending action is replaced, never stacked.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum CalcState {
    /// No pending action
    #[default]
    Idle,
    /// One pending action held
    Pending(PendingAction),
}

impl CalcState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending(_) => "Pending",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The pending action, if any.
    pub fn pending_action(&self) -> Option<&PendingAction> {
        match self {
            Self::Idle => None,
            Self::Pending(action) => Some(action),
        }
    }

    /// State after applying `operator` to an operand.
    ///
    /// From `Idle` the operand becomes the pending value. From `Pending`
    /// the stored operator folds the operand into the pending value first.
    /// Either way the new operator replaces the old one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{BinaryOp, CalcState, PendingAction};
    ///
    /// let state = CalcState::Idle
    ///     .chain(BinaryOp::Add, 3.0)
    ///     .chain(BinaryOp::Multiply, 4.0);
    ///
    /// assert_eq!(
    ///     state,
    ///     CalcState::Pending(PendingAction { value: 7.0, operator: BinaryOp::Multiply })
    /// );
    /// ```
    pub fn chain(&self, operator: BinaryOp, operand: f64) -> Self {
        let value = match self {
            Self::Idle => operand,
            Self::Pending(action) => action.resolve(operand),
        };
        Self::Pending(PendingAction { value, operator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(CalcState::Idle.name(), "Idle");
        let pending = CalcState::Pending(PendingAction {
            value: 1.0,
            operator: BinaryOp::Add,
        });
        assert_eq!(pending.name(), "Pending");
    }

    #[test]
    fn default_state_is_idle() {
        assert_eq!(CalcState::default(), CalcState::Idle);
        assert!(!CalcState::default().is_pending());
        assert!(CalcState::default().pending_action().is_none());
    }

    #[test]
    fn chain_from_idle_remembers_operand() {
        let state = CalcState::Idle.chain(BinaryOp::Divide, 8.0);

        let action = state.pending_action().copied();
        assert_eq!(
            action,
            Some(PendingAction {
                value: 8.0,
                operator: BinaryOp::Divide
            })
        );
    }

    #[test]
    fn chain_from_pending_folds_left_to_right() {
        let state = CalcState::Idle
            .chain(BinaryOp::Subtract, 10.0)
            .chain(BinaryOp::Divide, 4.0)
            .chain(BinaryOp::Add, 2.0);

        assert_eq!(
            state,
            CalcState::Pending(PendingAction {
                value: 3.0,
                operator: BinaryOp::Add
            })
        );
    }

    #[test]
    fn chain_is_pure() {
        let original = CalcState::Idle.chain(BinaryOp::Add, 1.0);
        let _next = original.chain(BinaryOp::Add, 2.0);

        assert_eq!(original.pending_action().map(|a| a.value), Some(1.0));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalcState::Idle.chain(BinaryOp::Multiply, 2.5);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalcState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
