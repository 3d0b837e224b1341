//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Input;
use crate::keymap::{input_to_key, key_to_input};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send an input to the calculator
    Calc(Input),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Terminal-only bindings for the memory keys
const MEMORY_KEYS: [(char, Input); 4] = [
    ('m', Input::MemoryAdd),
    ('M', Input::MemorySubtract),
    ('r', Input::MemoryRecall),
    ('R', Input::MemoryClear),
];

/// Input handler that maps key events to actions
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Calc(Input::ClearHistory),
                _ => KeyAction::None,
            };
        }

        let input = match code {
            KeyCode::Enter => Some(Input::Equals),
            KeyCode::Esc => Some(Input::Clear),
            KeyCode::Backspace => Some(Input::Backspace),
            KeyCode::Delete => Some(Input::ClearEntry),
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char(c) => MEMORY_KEYS
                .iter()
                .find(|(key, _)| *key == c)
                .map(|(_, input)| *input)
                .or_else(|| {
                    let mut buf = [0u8; 4];
                    key_to_input(c.encode_utf8(&mut buf))
                }),
            _ => None,
        };
        input.map_or(KeyAction::None, KeyAction::Calc)
    }
}

/// Key event that [`InputHandler`] maps back to `input`
#[must_use]
pub fn key_event_for(input: Input) -> Option<KeyEvent> {
    if input == Input::ClearHistory {
        return Some(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    }
    if let Some((c, _)) = MEMORY_KEYS.iter().find(|(_, i)| *i == input) {
        return Some(KeyEvent::new(KeyCode::Char(*c), KeyModifiers::NONE));
    }
    let code = match input_to_key(input)? {
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Esc,
        "Backspace" => KeyCode::Backspace,
        "Delete" => KeyCode::Delete,
        key => KeyCode::Char(key.chars().next()?),
    };
    Some(KeyEvent::new(code, KeyModifiers::NONE))
}
