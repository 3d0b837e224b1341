//! Calculator state and its entry-buffer editing rules
//!
//! The display buffer is only ever edited through the methods here, which
//! keep it non-empty with at most one decimal separator.

use crate::core::format::ERROR_SENTINEL;
use crate::core::{CalcError, Operator};

/// Left operand and operator waiting for the right operand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Left-hand operand captured when the operator was chosen
    pub operand: f64,
    /// Operator to apply once the right operand is known
    pub operator: Operator,
}

/// Where the next digit goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPhase {
    /// Digits extend the display
    #[default]
    Typing,
    /// An operator or equals was just applied; no operand entered yet
    Fresh,
    /// A computed or recalled value is shown; it counts as an entered operand
    Recalled,
}

/// The calculator's input state
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Option<PendingOperation>,
    phase: EntryPhase,
    error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the initial state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            phase: EntryPhase::Typing,
            error: None,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending operation, if an operator has been chosen
    #[must_use]
    pub const fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Left operand of the pending operation
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operator of the pending operation
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Entry phase
    #[must_use]
    pub const fn phase(&self) -> EntryPhase {
        self.phase
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub const fn awaiting_new_entry(&self) -> bool {
        !matches!(self.phase, EntryPhase::Typing)
    }

    /// Error that put the machine into the error state
    #[must_use]
    pub const fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    /// True while `Clear` is required before further input
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// True when equal to the freshly created state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn fail(&mut self, error: CalcError) {
        self.display = ERROR_SENTINEL.to_string();
        self.pending = None;
        self.phase = EntryPhase::Fresh;
        self.error = Some(error);
    }

    pub(crate) fn set_pending(&mut self, pending: Option<PendingOperation>) {
        self.pending = pending;
    }

    pub(crate) fn set_phase(&mut self, phase: EntryPhase) {
        self.phase = phase;
    }

    pub(crate) fn show(&mut self, text: String, phase: EntryPhase) {
        debug_assert!(!text.is_empty());
        self.display = text;
        self.phase = phase;
    }

    /// Starts a new entry with a digit or `"0."`
    pub(crate) fn start_entry(&mut self, digit: Option<char>) {
        self.display = digit.map_or_else(|| "0.".to_string(), |d| d.to_string());
        self.phase = EntryPhase::Typing;
    }

    /// Appends a digit, suppressing redundant leading zeros.
    ///
    /// Returns false when the display did not change.
    pub(crate) fn push_digit(&mut self, digit: char, max_digits: usize) -> bool {
        let digits = self.display.chars().filter(char::is_ascii_digit).count();
        match self.display.as_str() {
            "0" if digit == '0' => false,
            "0" => {
                self.display = digit.to_string();
                true
            }
            "-0" => {
                self.display = format!("-{digit}");
                true
            }
            _ if digits >= max_digits => false,
            _ => {
                self.display.push(digit);
                true
            }
        }
    }

    /// Appends a decimal point unless one is already present
    pub(crate) fn push_decimal(&mut self) -> bool {
        if self.display.contains('.') {
            return false;
        }
        self.display.push('.');
        true
    }

    /// Negates the display text in place
    pub(crate) fn negate(&mut self) -> bool {
        if self.display == "0" {
            return false;
        }
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else {
            self.display.insert(0, '-');
        }
        true
    }

    /// Removes the last typed character
    pub(crate) fn pop_char(&mut self) -> bool {
        if self.display == "0" {
            return false;
        }
        self.display.pop();
        if matches!(self.display.as_str(), "" | "-" | "-0") {
            self.display = "0".to_string();
        }
        true
    }
}
