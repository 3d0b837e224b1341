//! Declarative keypad layout
//!
//! One static button table serves every variant. Buttons for disabled
//! affordances are dropped, the remaining buttons of each table row are packed
//! left to right into a four-column grid, and empty rows disappear:
//!
//! ```text
//! [MC] [MR] [M+] [M-]      memory
//! [ C] [CE] [ %] [ ÷]
//! [ 7] [ 8] [ 9] [ ×]
//! [ 4] [ 5] [ 6] [ −]
//! [ 1] [ 2] [ 3] [ +]
//! [ ±] [ 0] [ .] [ =]
//! [ ⌫] [CH]                backspace, history
//! ```

use std::fmt;

use crate::core::{Input, Operator};
use crate::variant::{Features, VariantConfig};

/// Visual class of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// 0-9 and the decimal point
    Digit,
    /// + − × ÷
    Operator,
    /// =
    Equals,
    /// C, CE, ⌫, CH
    Clear,
    /// %, ±
    Function,
    /// MC, MR, M+, M-
    Memory,
}

/// A keypad button placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDef {
    /// Input sent when the button is clicked
    pub input: Input,
    /// Face text
    pub label: &'static str,
    /// Stable element id, e.g. `btn-7` or `btn-plus`
    pub id: &'static str,
    /// Visual class
    pub kind: ButtonKind,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

struct Slot {
    group: usize,
    input: Input,
    label: &'static str,
    id: &'static str,
    kind: ButtonKind,
}

const fn slot(
    group: usize,
    input: Input,
    label: &'static str,
    id: &'static str,
    kind: ButtonKind,
) -> Slot {
    Slot {
        group,
        input,
        label,
        id,
        kind,
    }
}

const fn digit(group: usize, d: u8, id: &'static str, label: &'static str) -> Slot {
    slot(group, Input::Digit(d), label, id, ButtonKind::Digit)
}

const fn op(group: usize, op: Operator, label: &'static str, id: &'static str) -> Slot {
    slot(group, Input::Operator(op), label, id, ButtonKind::Operator)
}

#[rustfmt::skip]
const TABLE: &[Slot] = &[
    slot(0, Input::MemoryClear, "MC", "btn-mem-clear", ButtonKind::Memory),
    slot(0, Input::MemoryRecall, "MR", "btn-mem-recall", ButtonKind::Memory),
    slot(0, Input::MemoryAdd, "M+", "btn-mem-add", ButtonKind::Memory),
    slot(0, Input::MemorySubtract, "M-", "btn-mem-subtract", ButtonKind::Memory),

    slot(1, Input::Clear, "C", "btn-clear", ButtonKind::Clear),
    slot(1, Input::ClearEntry, "CE", "btn-clear-entry", ButtonKind::Clear),
    slot(1, Input::Percent, "%", "btn-percent", ButtonKind::Function),
    op(1, Operator::Divide, "÷", "btn-divide"),

    digit(2, 7, "btn-7", "7"),
    digit(2, 8, "btn-8", "8"),
    digit(2, 9, "btn-9", "9"),
    op(2, Operator::Multiply, "×", "btn-times"),

    digit(3, 4, "btn-4", "4"),
    digit(3, 5, "btn-5", "5"),
    digit(3, 6, "btn-6", "6"),
    op(3, Operator::Subtract, "−", "btn-minus"),

    digit(4, 1, "btn-1", "1"),
    digit(4, 2, "btn-2", "2"),
    digit(4, 3, "btn-3", "3"),
    op(4, Operator::Add, "+", "btn-plus"),

    slot(5, Input::ToggleSign, "±", "btn-toggle-sign", ButtonKind::Function),
    digit(5, 0, "btn-0", "0"),
    slot(5, Input::Decimal, ".", "btn-decimal", ButtonKind::Digit),
    slot(5, Input::Equals, "=", "btn-equals", ButtonKind::Equals),

    slot(6, Input::Backspace, "⌫", "btn-backspace", ButtonKind::Clear),
    slot(6, Input::ClearHistory, "CH", "btn-clear-history", ButtonKind::Clear),
];

/// Keypad grid for one variant, with an optional pressed highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<ButtonDef>,
    rows: usize,
    cols: usize,
    pressed: Option<usize>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Buttons per row
    pub const COLUMNS: usize = 4;

    /// Keypad for the standard variant
    #[must_use]
    pub fn new() -> Self {
        Self::for_features(&VariantConfig::standard().features)
    }

    /// Keypad for a variant
    #[must_use]
    pub fn for_variant(config: &VariantConfig) -> Self {
        Self::for_features(&config.features)
    }

    /// Keypad offering only the buttons `features` allows
    ///
    /// Every button keeps the column it has in the full table, so a disabled
    /// affordance leaves a gap instead of shifting its neighbours. Groups with
    /// no enabled button are dropped.
    #[must_use]
    pub fn for_features(features: &Features) -> Self {
        let mut buttons: Vec<ButtonDef> = Vec::with_capacity(TABLE.len());
        let mut rows = 0;
        let mut placed: Option<(usize, usize)> = None;
        let mut group = None;
        let mut col = 0;

        for slot in TABLE {
            if group != Some(slot.group) {
                group = Some(slot.group);
                col = 0;
            }
            let slot_col = col;
            col += 1;
            if !features.allows(slot.input) {
                continue;
            }
            let row = match placed {
                Some((g, r)) if g == slot.group => r,
                _ => {
                    placed = Some((slot.group, rows));
                    rows += 1;
                    rows - 1
                }
            };
            buttons.push(ButtonDef {
                input: slot.input,
                label: slot.label,
                id: slot.id,
                kind: slot.kind,
                row,
                col: slot_col,
            });
        }

        Self {
            buttons,
            rows,
            cols: Self::COLUMNS,
            pressed: None,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&ButtonDef> {
        self.buttons.get(index)
    }

    /// Index of the button at a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.row == row && b.col == col)
    }

    /// Gets a button by row and column; short rows leave empty cells
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&ButtonDef> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that sends `input`
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.input == input)
    }

    /// Index of the button that sends `input`
    #[must_use]
    pub fn position_of(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Resolves a click on an element id to its input
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<Input> {
        self.find_button_by_id(id).map(|b| b.input)
    }

    /// Iterates buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &ButtonDef)> {
        self.buttons.iter().map(|b| ((b.row, b.col), b))
    }

    /// Index of the highlighted button
    #[must_use]
    pub const fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns true if the button at `index` is highlighted
    #[must_use]
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed == Some(index)
    }

    /// Highlights a button by index
    pub fn press(&mut self, index: usize) {
        if index < self.buttons.len() {
            self.pressed = Some(index);
        }
    }

    /// Clears the highlight
    pub fn release_all(&mut self) {
        self.pressed = None;
    }

    /// Highlights the button for `input`, if the keypad has one
    pub fn highlight(&mut self, input: Input) {
        self.pressed = self.position_of(input);
    }
}

impl fmt::Display for Keypad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| {
                    self.get_button_at(row, col)
                        .map_or_else(|| "    ".to_string(), |b| format!("[{:>2}]", b.label))
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn labels_in_row(keypad: &Keypad, row: usize) -> Vec<&'static str> {
        keypad
            .buttons()
            .iter()
            .filter(|b| b.row == row)
            .map(|b| b.label)
            .collect()
    }

    #[test]
    fn test_full_keypad_layout() {
        let keypad = Keypad::for_variant(&VariantConfig::full());
        assert_eq!(keypad.dimensions(), (7, 4));
        assert_eq!(keypad.button_count(), TABLE.len());
        assert_eq!(labels_in_row(&keypad, 0), vec!["MC", "MR", "M+", "M-"]);
        assert_eq!(labels_in_row(&keypad, 5), vec!["±", "0", ".", "="]);
        assert_eq!(labels_in_row(&keypad, 6), vec!["⌫", "CH"]);
    }

    #[test]
    fn test_basic_keypad_drops_affordances() {
        let keypad = Keypad::for_variant(&VariantConfig::basic());
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(labels_in_row(&keypad, 0), vec!["C", "÷"]);
        assert_eq!(labels_in_row(&keypad, 1), vec!["7", "8", "9", "×"]);
        assert_eq!(labels_in_row(&keypad, 4), vec!["0", ".", "="]);
        // Operators and equals stay in the last column, digits in theirs
        assert_eq!(keypad.get_button_at(0, 3).unwrap().id, "btn-divide");
        assert!(keypad.get_button_at(0, 1).is_none());
        assert_eq!(keypad.get_button_at(4, 1).unwrap().id, "btn-0");
        assert_eq!(keypad.get_button_at(4, 3).unwrap().id, "btn-equals");
        assert!(keypad.get_button_at(4, 0).is_none());
        assert!(keypad.find_button_by_input(Input::Percent).is_none());
        assert!(keypad.find_button_by_id("btn-mem-recall").is_none());
    }

    #[test]
    fn test_standard_keypad_has_no_memory_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().id, "btn-clear");
        assert_eq!(keypad.get_button_at(5, 0).unwrap().input, Input::Backspace);
        assert!(keypad.get_button_at(5, 1).is_none());
    }

    #[test]
    fn test_columns_fixed_across_variants() {
        let full = Keypad::for_variant(&VariantConfig::full());
        for config in VariantConfig::presets() {
            let keypad = Keypad::for_variant(&config);
            for btn in keypad.buttons() {
                let reference = full.find_button_by_id(btn.id).unwrap();
                assert_eq!(btn.col, reference.col, "{} in {}", btn.id, config.name);
            }
        }
    }

    #[test]
    fn test_every_keypad_offers_core_inputs() {
        for config in VariantConfig::presets() {
            let keypad = Keypad::for_variant(&config);
            for d in 0..=9 {
                assert!(keypad.find_button_by_input(Input::Digit(d)).is_some());
            }
            for op in Operator::ALL {
                assert!(keypad.find_button_by_input(Input::Operator(op)).is_some());
            }
            for input in [Input::Decimal, Input::Equals, Input::Clear] {
                assert!(keypad.find_button_by_input(input).is_some());
            }
        }
    }

    #[test]
    fn test_ids_unique_and_stable() {
        let keypad = Keypad::for_variant(&VariantConfig::full());
        let ids: HashSet<_> = keypad.buttons().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), keypad.button_count());
        assert_eq!(keypad.handle_click("btn-7"), Some(Input::Digit(7)));
        assert_eq!(
            keypad.handle_click("btn-plus"),
            Some(Input::Operator(Operator::Add))
        );
        assert_eq!(keypad.handle_click("btn-mem-recall"), Some(Input::MemoryRecall));
        assert_eq!(keypad.handle_click("btn-nope"), None);
    }

    #[test]
    fn test_operator_ids_follow_names() {
        let keypad = Keypad::new();
        for op in Operator::ALL {
            let btn = keypad.find_button_by_input(Input::Operator(op)).unwrap();
            assert_eq!(btn.id, format!("btn-{}", op.name()));
            assert_eq!(btn.kind, ButtonKind::Operator);
        }
    }

    #[test]
    fn test_positions_match_lookup() {
        let keypad = Keypad::for_variant(&VariantConfig::full());
        for ((row, col), btn) in keypad.buttons_with_positions() {
            assert!(col < Keypad::COLUMNS);
            assert_eq!(keypad.get_button_at(row, col), Some(btn));
        }
        assert!(keypad.get_button_at(99, 0).is_none());
    }

    #[test]
    fn test_pressed_highlight() {
        let mut keypad = Keypad::new();
        assert!(keypad.pressed().is_none());
        keypad.highlight(Input::Digit(5));
        let idx = keypad.position_of(Input::Digit(5)).unwrap();
        assert!(keypad.is_pressed(idx));
        keypad.highlight(Input::MemoryAdd);
        assert!(keypad.pressed().is_none());
        keypad.press(idx);
        keypad.release_all();
        assert!(keypad.pressed().is_none());
        keypad.press(999);
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_display_grid() {
        let text = Keypad::for_variant(&VariantConfig::basic()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "[ C]           [ ÷]");
        assert_eq!(lines[4], "     [ 0] [ .] [ =]");
        assert_eq!(lines[1], "[ 7] [ 8] [ 9] [ ×]");
    }
}
