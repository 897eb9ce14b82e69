//! The calculator state machine.

use crate::builder::{CalculatorBuilder, Key, KeyAction, Keymap};
use crate::core::{
    enforce_all, format_number, is_complete_number, parse_operand, BinaryOp, CalcState, Guard,
    Journal, JournalEntry, JournalEvent, PendingAction, Rejection,
};
use crate::machine::snapshot::Snapshot;
use crate::machine::step::{KeyOutcome, Step};
use chrono::Utc;
use stillwater::validation::Validation;

/// Guards for `apply_operator`.
const OPERATOR_GUARDS: &[Guard] = &[Guard::COMPLETE_INPUT];

/// Guards for `compute_result`.
const COMPUTE_GUARDS: &[Guard] = &[Guard::PENDING_ACTION, Guard::COMPLETE_INPUT];

/// Guards for `update_input`.
const INPUT_GUARDS: &[Guard] = &[Guard::ACCEPTED_TEXT];

/// Calculator widget core: current input text plus at most one pending
/// action.
///
/// Every request is total. A request whose preconditions fail returns
/// [`Step::Ignored`] and changes nothing.
///
/// # Example
///
/// ```rust
/// use tally::core::BinaryOp;
/// use tally::machine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.update_input("3");
/// calc.apply_operator(BinaryOp::Add);
/// calc.update_input("4");
/// calc.apply_operator(BinaryOp::Multiply);
/// calc.update_input("2");
/// calc.compute_result();
///
/// assert_eq!(calc.input_text(), "14");
/// assert!(!calc.has_pending_action());
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    input: String,
    state: CalcState,
    keymap: Keymap,
    journal: Journal,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create an idle calculator with empty input and default settings.
    pub fn new() -> Self {
        Self::from_parts(String::new(), Keymap::default(), Journal::new())
    }

    /// Start configuring a calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(input: String, keymap: Keymap, journal: Journal) -> Self {
        Self {
            input,
            state: CalcState::Idle,
            keymap,
            journal,
        }
    }

    /// Replace the input with `text` if it is a partial or complete number.
    ///
    /// The state (`Idle` / `Pending`) is unchanged either way.
    pub fn update_input(&mut self, text: &str) -> Step {
        if let Err(rejections) = self.precheck(INPUT_GUARDS, text) {
            return self.ignore("update_input", rejections);
        }

        tracing::trace!(input = text, state = self.state.name(), "input accepted");
        self.input = text.to_string();
        Step::Applied(self.state)
    }

    /// Consume the input as an operand and chain `operator`.
    ///
    /// From `Idle` the operand becomes the pending value. From `Pending` the
    /// stored operator folds the operand in first, then `operator` replaces
    /// it. The input is cleared.
    pub fn apply_operator(&mut self, operator: BinaryOp) -> Step {
        let operand = match self.operand(OPERATOR_GUARDS) {
            Ok(operand) => operand,
            Err(rejections) => return self.ignore("apply_operator", rejections),
        };

        let from = self.state;
        self.state = from.chain(operator, operand);
        self.input.clear();

        tracing::debug!(
            operator = operator.name(),
            operand,
            from = from.name(),
            pending = ?self.state.pending_action(),
            "operator applied"
        );
        self.record(from, JournalEvent::Operator(operator), operand);
        Step::Applied(self.state)
    }

    /// Resolve the pending action against the input and show the result.
    ///
    /// Requires a pending action and a complete input. The formatted result
    /// replaces the input and the calculator returns to `Idle`.
    pub fn compute_result(&mut self) -> Step {
        let operand = match self.operand(COMPUTE_GUARDS) {
            Ok(operand) => operand,
            Err(rejections) => return self.ignore("compute_result", rejections),
        };
        let CalcState::Pending(action) = self.state else {
            return self.ignore("compute_result", vec![Rejection::NoPendingAction]);
        };

        let from = self.state;
        let result = action.resolve(operand);
        self.state = CalcState::Idle;
        self.input = format_number(result);

        tracing::debug!(
            operator = action.operator.name(),
            lhs = action.value,
            rhs = operand,
            result,
            "result computed"
        );
        self.record(from, JournalEvent::Compute { result }, operand);
        Step::Applied(self.state)
    }

    /// Dispatch a key press through the keymap.
    ///
    /// Operator keys only act on a complete input; otherwise the key passes
    /// through so the text field can take it (a leading `-` is a sign).
    /// Compute keys are always consumed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::builder::Key;
    /// use tally::machine::{Calculator, KeyOutcome};
    ///
    /// let mut calc = Calculator::new();
    /// assert_eq!(calc.handle_key(Key::Char('-')), KeyOutcome::PassThrough);
    ///
    /// calc.update_input("8");
    /// assert_eq!(calc.handle_key(Key::Char('-')), KeyOutcome::Consumed);
    /// assert!(calc.has_pending_action());
    /// ```
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match self.keymap.lookup(key) {
            Some(KeyAction::Operator(operator)) if is_complete_number(&self.input) => {
                self.apply_operator(operator);
                KeyOutcome::Consumed
            }
            Some(KeyAction::Compute) => {
                self.compute_result();
                KeyOutcome::Consumed
            }
            Some(KeyAction::Operator(_)) | None => {
                tracing::trace!(%key, input = %self.input, "key passed through");
                KeyOutcome::PassThrough
            }
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input
    }

    /// Whether the input is a complete number, i.e. operators would act.
    pub fn is_currently_valid(&self) -> bool {
        is_complete_number(&self.input)
    }

    pub fn has_pending_action(&self) -> bool {
        self.state.is_pending()
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        self.state.pending_action().copied()
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let is_valid = self.is_currently_valid();
        Snapshot {
            input_text: self.input.clone(),
            is_valid,
            state: self.state.name(),
            pending: self.pending_action(),
            operators_enabled: is_valid,
            compute_enabled: is_valid && self.has_pending_action(),
        }
    }

    /// Enforce `guards` on the input and parse it as an operand.
    fn operand(&self, guards: &[Guard]) -> Result<f64, Vec<Rejection>> {
        self.precheck(guards, &self.input)?;
        parse_operand(&self.input).ok_or_else(|| {
            vec![Rejection::IncompleteInput {
                input: self.input.clone(),
            }]
        })
    }

    fn precheck(&self, guards: &[Guard], text: &str) -> Result<(), Vec<Rejection>> {
        match enforce_all(guards, &self.state, text) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(rejections) => Err(rejections.iter().cloned().collect()),
        }
    }

    fn ignore(&self, request: &'static str, rejections: Vec<Rejection>) -> Step {
        tracing::trace!(
            request,
            state = self.state.name(),
            input = %self.input,
            ?rejections,
            "request ignored"
        );
        Step::Ignored(rejections)
    }

    fn record(&mut self, from: CalcState, event: JournalEvent, operand: f64) {
        self.journal = self.journal.record(JournalEntry {
            from,
            to: self.state,
            event,
            operand,
            timestamp: Utc::now(),
        });
    }
}
