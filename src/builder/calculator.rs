//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::builder::keymap::Keymap;
use crate::core::{is_accepted_input, Journal, DEFAULT_JOURNAL_CAPACITY};
use crate::machine::Calculator;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use tally::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .initial_input("12")
///     .journal_capacity(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.input_text(), "12");
/// assert!(calc.is_currently_valid());
/// assert_eq!(calc.journal().capacity(), 8);
/// ```
#[derive(Default)]
pub struct CalculatorBuilder {
    keymap: Option<Keymap>,
    initial_input: Option<String>,
    journal_capacity: Option<usize>,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key bindings (defaults to `Keymap::default()`).
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = Some(keymap);
        self
    }

    /// Seed the input text. Must be a partial or complete number.
    pub fn initial_input(mut self, text: impl Into<String>) -> Self {
        self.initial_input = Some(text.into());
        self
    }

    /// Bound the number of journal entries retained.
    pub fn journal_capacity(mut self, capacity: usize) -> Self {
        self.journal_capacity = Some(capacity);
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let input = self.initial_input.unwrap_or_default();
        if !is_accepted_input(&input) {
            return Err(BuildError::InvalidInitialInput { input });
        }

        let capacity = self.journal_capacity.unwrap_or(DEFAULT_JOURNAL_CAPACITY);
        if capacity == 0 {
            return Err(BuildError::ZeroJournalCapacity);
        }

        Ok(Calculator::from_parts(
            input,
            self.keymap.unwrap_or_default(),
            Journal::with_capacity(capacity),
        ))
    }
}
