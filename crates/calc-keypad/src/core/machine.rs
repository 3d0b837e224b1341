//! Calculator input state machine
//!
//! Every keypad press, keyboard shortcut or scripted key becomes an [`Input`]
//! and goes through [`Calculator::apply`]. The machine defers each binary
//! operator until its right operand is known and resolves chained operators
//! strictly left to right, so `2 + 3 × 4 =` shows `20`.
//!
//! Evaluation failures never escape: the display switches to `"Error"` and
//! every input except `Clear` is ignored until the machine is reset.

use serde::Serialize;
use tracing::{debug, error, trace, warn};

use crate::core::history::{History, HistoryEntry};
use crate::core::{
    evaluate, parse_display, CalcError, CalcResult, CalculatorState, EntryPhase, Memory,
    NumberFormat, Operator, PendingOperation,
};
use crate::variant::{Features, VariantConfig};

/// A discrete calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset to the initial state
    Clear,
    /// Reset the current entry only
    ClearEntry,
    /// Delete the last typed character
    Backspace,
    /// Negate the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
    /// Add the display to memory
    MemoryAdd,
    /// Subtract the display from memory
    MemorySubtract,
    /// Show the memory value
    MemoryRecall,
    /// Zero the memory register
    MemoryClear,
    /// Empty the history log
    ClearHistory,
}

impl Input {
    /// Button face text
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::MemoryAdd => "M+".to_string(),
            Self::MemorySubtract => "M-".to_string(),
            Self::MemoryRecall => "MR".to_string(),
            Self::MemoryClear => "MC".to_string(),
            Self::ClearHistory => "CH".to_string(),
        }
    }
}

/// Outcome of applying one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The state changed (or was reset)
    Applied,
    /// The input had no effect
    Ignored,
    /// Evaluation failed; the machine is now in the error state
    Failed(CalcError),
}

impl Transition {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Applied
        } else {
            Self::Ignored
        }
    }

    /// Returns true for [`Transition::Applied`]
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Serializable view of everything a frontend renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Variant name
    pub variant: String,
    /// Main display text
    pub display: String,
    /// Secondary expression line
    pub expression: String,
    /// Pending operator, if any
    pub pending_operator: Option<Operator>,
    /// Whether the next digit starts a new number
    pub awaiting_new_entry: bool,
    /// Memory register value
    pub memory: f64,
    /// Error message while in the error state
    pub error: Option<String>,
    /// History, oldest first
    pub history: Vec<HistoryEntry>,
}

/// Keypad calculator configured by a [`VariantConfig`]
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    config: VariantConfig,
    memory: Memory,
    history: History,
    expression: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the standard variant
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(VariantConfig::standard())
    }

    /// Creates a calculator for a variant
    #[must_use]
    pub fn with_config(config: VariantConfig) -> Self {
        let history = History::with_capacity(config.history_capacity);
        Self {
            state: CalculatorState::new(),
            config,
            memory: Memory::new(),
            history,
            expression: String::new(),
        }
    }

    /// Creates a calculator for a built-in preset
    pub fn from_preset(name: &str) -> CalcResult<Self> {
        VariantConfig::preset(name).map(Self::with_config)
    }

    /// Main display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Secondary display line, e.g. `"5 +"` or `"5 + 3 ="`
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The input state
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The variant this calculator was built for
    #[must_use]
    pub const fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Enabled affordances
    #[must_use]
    pub const fn features(&self) -> &Features {
        &self.config.features
    }

    /// Memory register
    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Calculation history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// True while `Clear` is required
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Error that caused the error state
    #[must_use]
    pub const fn last_error(&self) -> Option<&CalcError> {
        self.state.error()
    }

    /// Captures everything a frontend renders
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            variant: self.config.name.clone(),
            display: self.display().to_string(),
            expression: self.expression.clone(),
            pending_operator: self.state.pending_operator(),
            awaiting_new_entry: self.state.awaiting_new_entry(),
            memory: self.memory.value(),
            error: self.last_error().map(ToString::to_string),
            history: self.history.iter().cloned().collect(),
        }
    }

    /// Applies one input and reports what happened
    pub fn apply(&mut self, input: Input) -> Transition {
        if !self.config.features.allows(input) {
            trace!(?input, variant = %self.config.name, "input not offered by variant");
            return Transition::Ignored;
        }
        if self.state.is_error() && input != Input::Clear {
            trace!(?input, "ignored while in error state");
            return Transition::Ignored;
        }

        let transition = match input {
            Input::Digit(d) => self.on_digit(d),
            Input::Decimal => self.on_decimal(),
            Input::Operator(op) => self.on_operator(op),
            Input::Equals => self.on_equals(),
            Input::Clear => self.on_clear(),
            Input::ClearEntry => self.on_clear_entry(),
            Input::Backspace => self.on_backspace(),
            Input::ToggleSign => self.on_toggle_sign(),
            Input::Percent => self.on_percent(),
            Input::MemoryAdd => self.on_memory(Memory::add),
            Input::MemorySubtract => self.on_memory(Memory::subtract),
            Input::MemoryRecall => self.on_memory_recall(),
            Input::MemoryClear => self.on_memory_clear(),
            Input::ClearHistory => self.on_clear_history(),
        };

        match &transition {
            Transition::Applied => {
                debug!(?input, display = %self.display(), expression = %self.expression, "input applied");
            }
            Transition::Ignored => trace!(?input, display = %self.display(), "input had no effect"),
            Transition::Failed(error) if error.is_arithmetic() => {
                warn!(?input, %error, "evaluation failed");
            }
            Transition::Failed(error) => error!(?input, %error, "display could not be read"),
        }
        transition
    }

    /// Applies inputs in order, returning the last transition
    pub fn apply_all(&mut self, inputs: impl IntoIterator<Item = Input>) -> Option<Transition> {
        inputs.into_iter().map(|input| self.apply(input)).last()
    }

    /// Types a digit (values above 9 are ignored)
    pub fn digit(&mut self, d: u8) -> Transition {
        self.apply(Input::Digit(d))
    }

    /// Types the decimal point
    pub fn decimal(&mut self) -> Transition {
        self.apply(Input::Decimal)
    }

    /// Chooses an operator
    pub fn operator(&mut self, op: Operator) -> Transition {
        self.apply(Input::Operator(op))
    }

    /// Resolves the pending operation
    pub fn equals(&mut self) -> Transition {
        self.apply(Input::Equals)
    }

    /// Resets to the initial state
    pub fn clear(&mut self) -> Transition {
        self.apply(Input::Clear)
    }

    fn fmt(&self, value: f64) -> String {
        self.format().format(value)
    }

    const fn format(&self) -> &NumberFormat {
        &self.config.format
    }

    fn fail(&mut self, error: CalcError) -> Transition {
        self.state.fail(error.clone());
        self.expression.clear();
        Transition::Failed(error)
    }

    fn current_value(&self) -> CalcResult<f64> {
        parse_display(self.state.display())
    }

    fn begin_entry(&mut self, digit: Option<char>) {
        self.state.start_entry(digit);
        self.drop_finished_expression();
    }

    /// A display replaced after `=` no longer belongs to the old expression
    fn drop_finished_expression(&mut self) {
        if self.state.pending().is_none() {
            self.expression.clear();
        }
    }

    fn on_digit(&mut self, d: u8) -> Transition {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return Transition::Ignored;
        };
        if self.state.awaiting_new_entry() || self.state.display().contains('e') {
            self.begin_entry(Some(c));
            return Transition::Applied;
        }
        Transition::from_changed(self.state.push_digit(c, self.config.max_entry_digits))
    }

    fn on_decimal(&mut self) -> Transition {
        if self.state.awaiting_new_entry() || self.state.display().contains('e') {
            self.begin_entry(None);
            return Transition::Applied;
        }
        Transition::from_changed(self.state.push_decimal())
    }

    fn on_operator(&mut self, op: Operator) -> Transition {
        match self.state.pending() {
            // No operand typed since the last operator: swap it
            Some(pending) if self.state.phase() == EntryPhase::Fresh => {
                self.state.set_pending(Some(PendingOperation {
                    operator: op,
                    ..pending
                }));
                self.expression = format!("{} {op}", self.fmt(pending.operand));
                Transition::Applied
            }
            Some(pending) => {
                let rhs = match self.current_value() {
                    Ok(v) => v,
                    Err(e) => return self.fail(e),
                };
                match evaluate(pending.operand, rhs, pending.operator) {
                    Ok(result) => {
                        let shown = self.fmt(result);
                        self.expression = format!("{shown} {op}");
                        self.state.show(shown, EntryPhase::Fresh);
                        self.state.set_pending(Some(PendingOperation {
                            operand: result,
                            operator: op,
                        }));
                        Transition::Applied
                    }
                    Err(e) => self.fail(e),
                }
            }
            None => {
                let operand = match self.current_value() {
                    Ok(v) => v,
                    Err(e) => return self.fail(e),
                };
                self.expression = format!("{} {op}", self.fmt(operand));
                self.state.set_pending(Some(PendingOperation {
                    operand,
                    operator: op,
                }));
                self.state.set_phase(EntryPhase::Fresh);
                Transition::Applied
            }
        }
    }

    fn on_equals(&mut self) -> Transition {
        let Some(pending) = self.state.pending() else {
            return Transition::Ignored;
        };
        // With no second operand typed, the display still shows the first one
        let rhs = match self.current_value() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };
        match evaluate(pending.operand, rhs, pending.operator) {
            Ok(result) => {
                let calculation = format!(
                    "{} {} {}",
                    self.fmt(pending.operand),
                    pending.operator,
                    self.fmt(rhs)
                );
                if self.config.features.history {
                    self.history.record(&calculation, result);
                }
                self.expression = format!("{calculation} =");
                self.state.set_pending(None);
                let shown = self.fmt(result);
                self.state.show(shown, EntryPhase::Fresh);
                Transition::Applied
            }
            Err(e) => self.fail(e),
        }
    }

    fn on_clear(&mut self) -> Transition {
        self.state.reset();
        self.expression.clear();
        Transition::Applied
    }

    fn on_clear_entry(&mut self) -> Transition {
        self.state.show("0".to_string(), EntryPhase::Typing);
        self.drop_finished_expression();
        Transition::Applied
    }

    fn on_backspace(&mut self) -> Transition {
        if self.state.phase() != EntryPhase::Typing {
            return Transition::Ignored;
        }
        Transition::from_changed(self.state.pop_char())
    }

    fn on_toggle_sign(&mut self) -> Transition {
        if !self.state.negate() {
            return Transition::Ignored;
        }
        if self.state.phase() == EntryPhase::Fresh {
            self.state.set_phase(EntryPhase::Recalled);
        }
        self.drop_finished_expression();
        Transition::Applied
    }

    fn on_percent(&mut self) -> Transition {
        let value = match self.current_value() {
            Ok(v) => v,
            Err(e) => return self.fail(e),
        };
        let shown = self.fmt(value / 100.0);
        self.state.show(shown, EntryPhase::Recalled);
        self.drop_finished_expression();
        Transition::Applied
    }

    fn on_memory(&mut self, update: fn(&mut Memory, f64) -> CalcResult<()>) -> Transition {
        match self
            .current_value()
            .and_then(|value| update(&mut self.memory, value))
        {
            Ok(()) => Transition::Applied,
            Err(e) => self.fail(e),
        }
    }

    fn on_memory_recall(&mut self) -> Transition {
        let shown = self.fmt(self.memory.value());
        self.state.show(shown, EntryPhase::Recalled);
        self.drop_finished_expression();
        Transition::Applied
    }

    fn on_memory_clear(&mut self) -> Transition {
        let was_set = self.memory.is_set();
        self.memory.clear();
        Transition::from_changed(was_set)
    }

    fn on_clear_history(&mut self) -> Transition {
        let had_entries = !self.history.is_empty();
        self.history.clear();
        Transition::from_changed(had_entries)
    }
}
