//! Terminal frontend (ratatui + crossterm)

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{key_event_for, InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
