//! Keyboard map and key scripts
//!
//! Key names follow DOM `KeyboardEvent.key` values, so the same table serves
//! browser-style frontends, the terminal and scripted input.

use crate::core::{CalcError, CalcResult, Input, Operator};

/// Maps a key name to a calculator input
#[must_use]
pub fn key_to_input(key: &str) -> Option<Input> {
    match key {
        "Enter" | "=" => Some(Input::Equals),
        "Escape" | "c" | "C" => Some(Input::Clear),
        "Backspace" => Some(Input::Backspace),
        "Delete" => Some(Input::ClearEntry),
        "." | "," => Some(Input::Decimal),
        "%" => Some(Input::Percent),
        "n" | "N" => Some(Input::ToggleSign),
        _ => {
            let mut chars = key.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            if let Some(d) = c.to_digit(10) {
                return Some(Input::Digit(d as u8));
            }
            Operator::from_char(c).map(Input::Operator)
        }
    }
}

/// Key name that produces `input`, if any key does
#[must_use]
pub fn input_to_key(input: Input) -> Option<&'static str> {
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    match input {
        Input::Digit(d) => DIGITS.get(usize::from(d)).copied(),
        Input::Decimal => Some("."),
        Input::Operator(Operator::Add) => Some("+"),
        Input::Operator(Operator::Subtract) => Some("-"),
        Input::Operator(Operator::Multiply) => Some("*"),
        Input::Operator(Operator::Divide) => Some("/"),
        Input::Equals => Some("Enter"),
        Input::Clear => Some("Escape"),
        Input::ClearEntry => Some("Delete"),
        Input::Backspace => Some("Backspace"),
        Input::Percent => Some("%"),
        Input::ToggleSign => Some("n"),
        Input::MemoryAdd
        | Input::MemorySubtract
        | Input::MemoryRecall
        | Input::MemoryClear
        | Input::ClearHistory => None,
    }
}

fn named_token(token: &str) -> Option<Input> {
    let input = match token.to_ascii_lowercase().as_str() {
        "enter" => Input::Equals,
        "escape" | "esc" | "ac" => Input::Clear,
        "ce" | "delete" | "del" => Input::ClearEntry,
        "backspace" | "bs" | "⌫" => Input::Backspace,
        "mc" => Input::MemoryClear,
        "mr" => Input::MemoryRecall,
        "m+" => Input::MemoryAdd,
        "m-" => Input::MemorySubtract,
        "+/-" | "±" | "neg" => Input::ToggleSign,
        "ch" => Input::ClearHistory,
        _ => return None,
    };
    Some(input)
}

/// Parses a whitespace-separated key script.
///
/// Named tokens (`CE`, `MR`, `M+`, `+/-`, `Enter`, ...) are matched first,
/// case-insensitively. Any other token is read one key per character, so
/// `"12+3="` and `"1 2 + 3 ="` produce the same inputs.
///
/// # Errors
///
/// Returns [`CalcError::UnknownKey`] for a character no key produces.
pub fn parse_sequence(script: &str) -> CalcResult<Vec<Input>> {
    let mut inputs = Vec::new();
    for token in script.split_whitespace() {
        if let Some(input) = named_token(token) {
            inputs.push(input);
            continue;
        }
        for c in token.chars() {
            let mut buf = [0u8; 4];
            let key = c.encode_utf8(&mut buf);
            let input = key_to_input(key).ok_or_else(|| CalcError::UnknownKey(key.to_string()))?;
            inputs.push(input);
        }
    }
    Ok(inputs)
}
