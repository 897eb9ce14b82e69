//! Transition journal.
//!
//! Keeps a bounded, in-memory record of applied operator and compute
//! transitions for diagnostics. Nothing is persisted; the journal lives and
//! dies with its calculator.

use super::operator::BinaryOp;
use super::state::CalcState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Entries retained when no capacity is configured.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 64;

/// What caused a journaled transition.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum JournalEvent {
    /// An operator consumed the input
    Operator(BinaryOp),
    /// The pending action was resolved into a result
    Compute { result: f64 },
}

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use tally::core::{BinaryOp, CalcState, JournalEntry, JournalEvent};
/// use chrono::Utc;
///
/// let entry = JournalEntry {
///     from: CalcState::Idle,
///     to: CalcState::Idle.chain(BinaryOp::Add, 3.0),
///     event: JournalEvent::Operator(BinaryOp::Add),
///     operand: 3.0,
///     timestamp: Utc::now(),
/// };
/// assert!(entry.to.is_pending());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The state being transitioned from
    pub from: CalcState,
    /// The state being transitioned to
    pub to: CalcState,
    /// The request that caused the transition
    pub event: JournalEvent,
    /// The operand consumed from the input
    pub operand: f64,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded journal of transitions.
///
/// The journal is immutable - `record` returns a new journal with the entry
/// added, evicting the oldest entries once capacity is reached.
///
/// # Example
///
/// ```rust
/// use tally::core::{BinaryOp, CalcState, Journal, JournalEntry, JournalEvent};
/// use chrono::Utc;
///
/// let journal = Journal::with_capacity(1);
/// let first = CalcState::Idle.chain(BinaryOp::Add, 1.0);
/// let second = first.chain(BinaryOp::Add, 2.0);
///
/// let journal = journal
///     .record(JournalEntry {
///         from: CalcState::Idle,
///         to: first,
///         event: JournalEvent::Operator(BinaryOp::Add),
///         operand: 1.0,
///         timestamp: Utc::now(),
///     })
///     .record(JournalEntry {
///         from: first,
///         to: second,
///         event: JournalEvent::Operator(BinaryOp::Add),
///         operand: 2.0,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(journal.len(), 1);
/// assert_eq!(journal.entries()[0].operand, 2.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    capacity: usize,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    /// Create an empty journal with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }

    /// Create an empty journal retaining at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, returning a new journal.
    ///
    /// This is a pure function - it does not mutate the existing journal.
    pub fn record(&self, entry: JournalEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained entry followed by
    /// the `to` state of every entry.
    pub fn get_path(&self) -> Vec<&CalcState> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(&first.from);
        }
        for entry in &self.entries {
            path.push(&entry.to);
        }
        path
    }

    /// Time elapsed between the oldest and newest retained entries.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Most recently computed result still in the journal.
    pub fn last_result(&self) -> Option<f64> {
        self.entries.iter().rev().find_map(|entry| match entry.event {
            JournalEvent::Compute { result } => Some(result),
            JournalEvent::Operator(_) => None,
        })
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
