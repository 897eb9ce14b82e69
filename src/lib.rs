//! Tally: the core of a single-screen calculator widget
//!
//! Tally is built on the "pure core, imperative shell" philosophy. The rules
//! deciding which text forms a valid number, how pending operations chain
//! and when a result is committed are pure functions; a small state machine
//! wraps them behind one method per user event. Rendering, focus and event
//! wiring are left to the UI layer, which forwards events in and reads state
//! back out.
//!
//! # Core Concepts
//!
//! - **Validation**: complete vs. partial numbers gate every keystroke
//! - **State**: `Idle`, or `Pending` with one remembered operand and operator
//! - **Guards**: pure preconditions; failed guards make a request a no-op
//! - **Steps**: every request reports whether it applied or why it was ignored
//!
//! Evaluation is strictly left to right with no precedence, and arithmetic
//! follows `f64` semantics: dividing by zero produces `Infinity` or `NaN`
//! rather than an error.
//!
//! # Example
//!
//! ```rust
//! use tally::builder::Key;
//! use tally::core::BinaryOp;
//! use tally::Calculator;
//!
//! let mut calc = Calculator::new();
//!
//! calc.update_input("3");
//! calc.apply_operator(BinaryOp::Add);
//! calc.update_input("4");
//! calc.handle_key(Key::Char('*'));
//! calc.update_input("2");
//! calc.handle_key(Key::Enter);
//! assert_eq!(calc.input_text(), "14");
//!
//! // Text that is neither a partial nor a complete number is discarded.
//! calc.update_input("14-");
//! assert_eq!(calc.input_text(), "14");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, Key, KeyAction, Keymap};
pub use crate::core::{BinaryOp, CalcState, PendingAction, Rejection};
pub use machine::{Calculator, KeyOutcome, Snapshot, Step};
