//! Unified calculator drivers
//!
//! Every frontend reaches the same [`Calculator`] through a different
//! surface: keypad clicks, DOM key names, terminal key events. A
//! [`CalculatorDriver`] hides that surface so one verification routine runs
//! unchanged against all of them.

use crate::core::{CalcError, CalcResult, Calculator, Input, Transition};
use crate::keymap::{input_to_key, key_to_input, parse_sequence};
use crate::layout::Keypad;
use crate::variant::VariantConfig;

/// Interface shared by every calculator frontend
pub trait CalculatorDriver {
    /// Delivers one input through the frontend's own surface.
    ///
    /// Returns false when the frontend has no way to produce the input.
    fn press(&mut self, input: Input) -> bool;

    /// Main display text
    fn display(&self) -> String;

    /// Secondary expression line
    fn expression(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// History entries (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Parses a key script and delivers every input
    fn run_script(&mut self, script: &str) -> CalcResult<()> {
        for input in parse_sequence(script)? {
            if !self.press(input) {
                return Err(CalcError::UnknownKey(input.label()));
            }
        }
        Ok(())
    }
}

/// A simplified history item for driver results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The calculation, e.g. `"5 + 3"`
    pub expression: String,
    /// The formatted result
    pub result: String,
}

fn history_items(calculator: &Calculator) -> Vec<HistoryItem> {
    calculator
        .history()
        .iter_rev()
        .map(|entry| HistoryItem {
            expression: entry.expression.clone(),
            result: calculator.config().format.format(entry.result),
        })
        .collect()
}

/// Drives the calculator by clicking keypad buttons by element id
#[derive(Debug, Clone)]
pub struct ButtonDriver {
    calculator: Calculator,
    keypad: Keypad,
}

impl Default for ButtonDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonDriver {
    /// Creates a driver for the standard variant
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(VariantConfig::standard())
    }

    /// Creates a driver for a variant
    #[must_use]
    pub fn with_config(config: VariantConfig) -> Self {
        Self {
            keypad: Keypad::for_variant(&config),
            calculator: Calculator::with_config(config),
        }
    }

    /// Clicks the button with element id `id`
    pub fn click(&mut self, id: &str) -> Option<Transition> {
        let input = self.keypad.handle_click(id)?;
        Some(self.calculator.apply(input))
    }

    /// The keypad being clicked
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The calculator behind the keypad
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for ButtonDriver {
    fn press(&mut self, input: Input) -> bool {
        let Some(id) = self.keypad.find_button_by_input(input).map(|b| b.id) else {
            return false;
        };
        self.click(id).is_some()
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn expression(&self) -> String {
        self.calculator.expression().to_string()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }

    fn history(&self) -> Vec<HistoryItem> {
        history_items(&self.calculator)
    }
}

/// Drives the calculator by typing DOM-style key names
#[derive(Debug, Clone, Default)]
pub struct KeyboardDriver {
    calculator: Calculator,
}

impl KeyboardDriver {
    /// Creates a driver for the standard variant
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver for a variant
    #[must_use]
    pub fn with_config(config: VariantConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
        }
    }

    /// Types one key; unmapped keys return `None`
    pub fn type_key(&mut self, key: &str) -> Option<Transition> {
        let input = key_to_input(key)?;
        Some(self.calculator.apply(input))
    }

    /// The calculator behind the keyboard
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for KeyboardDriver {
    fn press(&mut self, input: Input) -> bool {
        input_to_key(input).is_some_and(|key| self.type_key(key).is_some())
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn expression(&self) -> String {
        self.calculator.expression().to_string()
    }

    fn clear(&mut self) {
        self.calculator.clear();
    }

    fn history(&self) -> Vec<HistoryItem> {
        history_items(&self.calculator)
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{history_items, CalculatorDriver, HistoryItem};
    use crate::core::Input;
    use crate::tui::{key_event_for, CalculatorApp, InputHandler};
    use crate::variant::VariantConfig;

    /// Drives the terminal app with crossterm key events, falling back to
    /// keypad clicks for inputs without a key binding
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        handler: InputHandler,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a driver for the standard variant
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a driver for a variant
        #[must_use]
        pub fn with_config(config: VariantConfig) -> Self {
            Self::with_app(CalculatorApp::with_config(config))
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                handler: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) -> bool {
            if let Some(event) = key_event_for(input) {
                let action = self.handler.handle_key(event);
                return self.app.handle_action(action).is_some();
            }
            let Some(id) = self.app.keypad().find_button_by_input(input).map(|b| b.id) else {
                return false;
            };
            self.app.click(id).is_some()
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn expression(&self) -> String {
            self.app.calculator().expression().to_string()
        }

        fn clear(&mut self) {
            self.app.press(Input::Clear);
        }

        fn history(&self) -> Vec<HistoryItem> {
            history_items(self.app.calculator())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared driver checks =====
// These run against ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (script, expected) in [("5+3=", "8"), ("9-4=", "5"), ("6*7=", "42"), ("8/2=", "4")] {
        driver.clear();
        driver.run_script(script).unwrap();
        assert_eq!(driver.display(), expected, "script {script}");
    }
    driver.clear();
}

/// Verifies strict left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run_script("2+3*4=").unwrap();
    assert_eq!(driver.display(), "20");

    driver.clear();
    driver.run_script("9+9+").unwrap();
    assert_eq!(driver.display(), "18");
    assert_eq!(driver.expression(), "18 +");

    driver.run_script("2=").unwrap();
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies the error display and that only Clear leaves it
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run_script("9/0=").unwrap();
    assert_eq!(driver.display(), "Error");

    driver.run_script("5+").unwrap();
    assert_eq!(driver.display(), "Error");

    driver.clear();
    assert_eq!(driver.display(), "0");
}

/// Verifies decimal point handling and float noise trimming
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.run_script("1..5").unwrap();
    assert_eq!(driver.display(), "1.5");

    driver.clear();
    driver.run_script(".5").unwrap();
    assert_eq!(driver.display(), "0.5");

    driver.clear();
    driver.run_script("0.1+0.2=").unwrap();
    assert_eq!(driver.display(), "0.3");
    driver.clear();
}

/// Verifies that Clear returns to the initial display
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.run_script("5+3").unwrap();
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert!(driver.expression().is_empty());

    driver.run_script("7=").unwrap();
    assert_eq!(driver.display(), "7");
    driver.clear();
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_decimal_entry(driver);
    verify_clear(driver);
}
