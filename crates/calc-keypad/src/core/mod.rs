//! Core calculator logic
//!
//! Everything a keypad frontend needs lives here: the binary operators and
//! their evaluation, number formatting, the input state machine, the memory
//! register and the calculation history. Nothing in this module knows about
//! terminals or buttons.

mod format;
pub mod history;
mod machine;
mod memory;
mod operations;
mod state;

pub use format::{parse_display, NumberFormat, ERROR_SENTINEL};
pub use machine::{Calculator, Input, Snapshot, Transition};
pub use memory::Memory;
pub use operations::{evaluate, Operator};
pub use state::{CalculatorState, EntryPhase, PendingOperation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Display text could not be read back as a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    /// Key name that maps to no calculator input
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    /// Variant configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true for errors raised while evaluating arithmetic
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::Overflow | Self::InvalidResult(_)
        )
    }
}
