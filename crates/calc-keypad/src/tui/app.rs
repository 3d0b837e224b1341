//! TUI application state

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::keypad::hit_test;
use crate::core::{Calculator, Input, Transition};
use crate::layout::Keypad;
use crate::variant::VariantConfig;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    handler: InputHandler,
    last: Option<Transition>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app for the standard variant
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(VariantConfig::standard())
    }

    /// Creates an app for a variant
    #[must_use]
    pub fn with_config(config: VariantConfig) -> Self {
        Self {
            keypad: Keypad::for_variant(&config),
            calculator: Calculator::with_config(config),
            handler: InputHandler::new(),
            last: None,
            should_quit: false,
        }
    }

    /// The calculator being driven
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The on-screen keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Result of the most recent input
    #[must_use]
    pub const fn last_transition(&self) -> Option<&Transition> {
        self.last.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies an input and highlights its keypad button
    pub fn press(&mut self, input: Input) -> Transition {
        self.keypad.highlight(input);
        let transition = self.calculator.apply(input);
        self.last = Some(transition.clone());
        transition
    }

    /// Performs a key action; returns the transition for calculator inputs
    pub fn handle_action(&mut self, action: KeyAction) -> Option<Transition> {
        match action {
            KeyAction::Calc(input) => Some(self.press(input)),
            KeyAction::Quit => {
                self.quit();
                None
            }
            KeyAction::None => None,
        }
    }

    /// Maps and performs a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Transition> {
        let action = self.handler.handle_key(event);
        self.handle_action(action)
    }

    /// Clicks the keypad button with element id `id`
    pub fn click(&mut self, id: &str) -> Option<Transition> {
        let input = self.keypad.handle_click(id)?;
        Some(self.press(input))
    }

    /// Clicks whatever button lies under terminal cell `(x, y)`
    pub fn click_at(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Transition> {
        let index = hit_test(&self.keypad, keypad_area, x, y)?;
        let input = self.keypad.get_button(index)?.input;
        Some(self.press(input))
    }

    /// One-line status for the footer
    #[must_use]
    pub fn status_line(&self) -> String {
        match &self.last {
            Some(Transition::Failed(e)) => format!("✗ {e} (press C)"),
            Some(Transition::Ignored) if self.calculator.is_error() => "Press C to clear".to_string(),
            Some(Transition::Ignored) => "· no effect".to_string(),
            Some(Transition::Applied) | None => {
                let features = self.calculator.features().enabled();
                if features.is_empty() {
                    "Ready".to_string()
                } else {
                    format!("Ready · {}", features.join(", "))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.calculator().display(), "0");
        assert!(app.last_transition().is_none());
        assert!(!app.should_quit());
        assert!(app.keypad().pressed().is_none());
    }

    #[test]
    fn test_press_highlights_button() {
        let mut app = CalculatorApp::new();
        app.press(Input::Digit(8));
        let idx = app.keypad().position_of(Input::Digit(8)).unwrap();
        assert!(app.keypad().is_pressed(idx));
        assert_eq!(app.last_transition(), Some(&Transition::Applied));
    }

    #[test]
    fn test_handle_key_sequence() {
        let mut app = CalculatorApp::new();
        for c in "12*3".chars() {
            app.handle_key(key(c));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.calculator().display(), "36");
        assert_eq!(app.calculator().expression(), "12 × 3 =");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = CalculatorApp::new();
        assert!(app.handle_key(key('q')).is_none());
        assert!(app.should_quit());

        let mut app = CalculatorApp::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_unmapped_key_does_nothing() {
        let mut app = CalculatorApp::new();
        assert!(app.handle_action(KeyAction::None).is_none());
        assert!(app.last_transition().is_none());
    }

    #[test]
    fn test_click_by_id() {
        let mut app = CalculatorApp::with_config(VariantConfig::memory());
        app.click("btn-9");
        app.click("btn-mem-add");
        app.click("btn-clear");
        assert_eq!(app.click("btn-mem-recall"), Some(Transition::Applied));
        assert_eq!(app.calculator().display(), "9");
        assert!(app.click("btn-missing").is_none());
    }

    #[test]
    fn test_click_at_cell() {
        let mut app = CalculatorApp::new();
        let (rows, cols) = app.keypad().dimensions();
        let area = Rect::new(0, 0, cols as u16 * 5 + 2, rows as u16 * 5 + 2);
        // Row 1, column 0 is the 7 key
        app.click_at(area, 2, 7);
        assert_eq!(app.calculator().display(), "7");
        assert!(app.click_at(area, 0, 0).is_none());
    }

    #[test]
    fn test_status_line() {
        let mut app = CalculatorApp::with_config(VariantConfig::basic());
        assert_eq!(app.status_line(), "Ready");

        app.press(Input::Percent);
        assert_eq!(app.status_line(), "· no effect");

        for input in [
            Input::Digit(1),
            Input::Operator(crate::core::Operator::Divide),
            Input::Digit(0),
        ] {
            app.press(input);
        }
        assert_eq!(
            app.press(Input::Equals),
            Transition::Failed(CalcError::DivisionByZero)
        );
        assert!(app.status_line().contains("Division by zero"));

        app.press(Input::Digit(4));
        assert_eq!(app.status_line(), "Press C to clear");
    }

    #[test]
    fn test_status_line_lists_features() {
        let app = CalculatorApp::new();
        assert!(app.status_line().starts_with("Ready · percent"));
    }
}
