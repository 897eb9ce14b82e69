//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Numeric text validation, operand parsing and result formatting
//! - Binary operators
//! - The `Idle` / `Pending` state and its chaining rule
//! - Guard predicates for transition control
//! - A bounded, in-memory transition journal
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod guard;
mod journal;
mod number;
mod operator;
mod state;

pub use guard::{enforce_all, Guard, GuardCheck, Rejection};
pub use journal::{Journal, JournalEntry, JournalEvent, DEFAULT_JOURNAL_CAPACITY};
pub use number::{
    format_number, is_accepted_input, is_complete_number, is_partial_number, parse_operand,
};
pub use operator::BinaryOp;
pub use state::{CalcState, PendingAction};
