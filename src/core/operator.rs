//! Binary arithmetic operators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
///
/// Each operator is a pure `(f64, f64) -> f64` function with standard
/// floating-point semantics: dividing by zero yields an infinity or NaN.
///
/// # Example
///
/// ```rust
/// use tally::core::BinaryOp;
///
/// assert_eq!(BinaryOp::Subtract.apply(3.0, 4.0), -1.0);
/// assert!(BinaryOp::Divide.apply(5.0, 0.0).is_infinite());
/// assert_eq!(BinaryOp::from_symbol('*'), Some(BinaryOp::Multiply));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Every operator, in button order.
    pub const ALL: [BinaryOp; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Apply the operator to `(lhs, rhs)`.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// The operator's button label and default shortcut.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
