//! calc-keypad: a keypad calculator as one parameterized state machine
//!
//! Button presses and keys become [`Input`](core::Input)s. A
//! [`Calculator`](core::Calculator) applies them with immediate-execution
//! semantics: operators are deferred until the right operand is known and
//! chains resolve left to right. A [`VariantConfig`](variant::VariantConfig)
//! selects the optional affordances (percent, sign toggle, memory, history,
//! ...) and the display rules, and the keypad layout is derived from it.
//!
//! # Example
//!
//! ```rust
//! use calc_keypad::prelude::*;
//!
//! let mut calc = Calculator::with_config(VariantConfig::full());
//! for input in parse_sequence("2 + 3 * 4 =").unwrap() {
//!     calc.apply(input);
//! }
//! assert_eq!(calc.display(), "20");
//! assert_eq!(calc.expression(), "5 × 4 =");
//!
//! calc.apply(Input::Clear);
//! for input in parse_sequence("9/0=").unwrap() {
//!     calc.apply(input);
//! }
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keymap;
pub mod layout;
pub mod variant;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, Input, Memory, NumberFormat, Operator, Transition,
    };
    pub use crate::driver::{ButtonDriver, CalculatorDriver, HistoryItem, KeyboardDriver};
    pub use crate::keymap::{key_to_input, parse_sequence};
    pub use crate::layout::{ButtonDef, ButtonKind, Keypad};
    pub use crate::variant::{Features, VariantConfig};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
