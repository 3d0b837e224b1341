//! Calculator variants: which affordances a keypad offers and how it formats
//!
//! A variant replaces one hand-written calculator page. The built-in presets
//! cover the common combinations; anything else can be described in YAML:
//!
//! ```yaml
//! name: office
//! title: Office Calculator
//! features:
//!   percent: true
//!   memory: true
//! format:
//!   max_display_len: 14
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Input, NumberFormat};

/// Optional affordances on top of the four-function core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// `%` divides the display by 100
    pub percent: bool,
    /// `±` negates the display
    pub toggle_sign: bool,
    /// `⌫` deletes the last typed character
    pub backspace: bool,
    /// `CE` clears the current entry only
    pub clear_entry: bool,
    /// `MC` `MR` `M+` `M-` memory register
    pub memory: bool,
    /// Log of completed calculations
    pub history: bool,
}

impl Features {
    /// Four functions, clear and equals only
    pub const BASIC: Self = Self {
        percent: false,
        toggle_sign: false,
        backspace: false,
        clear_entry: false,
        memory: false,
        history: false,
    };

    /// Percent, sign toggle, backspace and clear entry
    pub const STANDARD: Self = Self {
        percent: true,
        toggle_sign: true,
        backspace: true,
        clear_entry: true,
        memory: false,
        history: false,
    };

    /// Every affordance
    pub const FULL: Self = Self {
        percent: true,
        toggle_sign: true,
        backspace: true,
        clear_entry: true,
        memory: true,
        history: true,
    };

    /// Returns true if the variant accepts this input
    #[must_use]
    pub const fn allows(&self, input: Input) -> bool {
        match input {
            Input::Digit(_)
            | Input::Decimal
            | Input::Operator(_)
            | Input::Equals
            | Input::Clear => true,
            Input::Percent => self.percent,
            Input::ToggleSign => self.toggle_sign,
            Input::Backspace => self.backspace,
            Input::ClearEntry => self.clear_entry,
            Input::MemoryAdd
            | Input::MemorySubtract
            | Input::MemoryRecall
            | Input::MemoryClear => self.memory,
            Input::ClearHistory => self.history,
        }
    }

    /// Names of the enabled affordances
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.percent, "percent"),
            (self.toggle_sign, "toggle-sign"),
            (self.backspace, "backspace"),
            (self.clear_entry, "clear-entry"),
            (self.memory, "memory"),
            (self.history, "history"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

/// A named calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Identifier used on the command line
    pub name: String,
    /// Human-readable title shown by frontends
    pub title: String,
    /// Enabled affordances
    pub features: Features,
    /// Display formatting rules
    pub format: NumberFormat,
    /// Entries kept in the history log
    pub history_capacity: usize,
    /// Digits accepted in a single entry
    pub max_entry_digits: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl VariantConfig {
    /// Digits accepted in a single entry unless configured otherwise
    pub const DEFAULT_MAX_ENTRY_DIGITS: usize = 16;
    /// History entries kept unless configured otherwise
    pub const DEFAULT_HISTORY_CAPACITY: usize = 3;
    /// Names of the built-in presets
    pub const PRESET_NAMES: [&'static str; 5] = ["basic", "standard", "memory", "history", "full"];

    fn with_features(name: &str, title: &str, features: Features) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            features,
            format: NumberFormat::default(),
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
            max_entry_digits: Self::DEFAULT_MAX_ENTRY_DIGITS,
        }
    }

    /// Four-function calculator
    #[must_use]
    pub fn basic() -> Self {
        Self::with_features("basic", "Basic Calculator", Features::BASIC)
    }

    /// Four functions plus percent, sign toggle, backspace and clear entry
    #[must_use]
    pub fn standard() -> Self {
        Self::with_features("standard", "Standard Calculator", Features::STANDARD)
    }

    /// Standard plus memory register
    #[must_use]
    pub fn memory() -> Self {
        Self::with_features(
            "memory",
            "Memory Calculator",
            Features {
                memory: true,
                ..Features::STANDARD
            },
        )
    }

    /// Standard plus history log
    #[must_use]
    pub fn history() -> Self {
        Self::with_features(
            "history",
            "History Calculator",
            Features {
                history: true,
                ..Features::STANDARD
            },
        )
    }

    /// Every affordance
    #[must_use]
    pub fn full() -> Self {
        Self {
            history_capacity: 10,
            ..Self::with_features("full", "Full Calculator", Features::FULL)
        }
    }

    /// Looks up a built-in preset by name
    pub fn preset(name: &str) -> CalcResult<Self> {
        match name {
            "basic" => Ok(Self::basic()),
            "standard" => Ok(Self::standard()),
            "memory" => Ok(Self::memory()),
            "history" => Ok(Self::history()),
            "full" => Ok(Self::full()),
            other => Err(CalcError::config(format!(
                "unknown variant '{other}' (expected one of: {})",
                Self::PRESET_NAMES.join(", ")
            ))),
        }
    }

    /// All built-in presets in listing order
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![
            Self::basic(),
            Self::standard(),
            Self::memory(),
            Self::history(),
            Self::full(),
        ]
    }

    /// Parses and validates a YAML variant description
    pub fn from_yaml(yaml: &str) -> CalcResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| CalcError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the variant to YAML
    pub fn to_yaml(&self) -> CalcResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Checks the configuration for values no frontend can honor
    pub fn validate(&self) -> CalcResult<()> {
        if self.name.trim().is_empty() {
            return Err(CalcError::config("name must not be empty"));
        }
        if self.format.max_display_len < 8 {
            return Err(CalcError::config(format!(
                "format.max_display_len must be at least 8, got {}",
                self.format.max_display_len
            )));
        }
        if self.format.max_fraction_digits > 20 {
            return Err(CalcError::config(format!(
                "format.max_fraction_digits must be at most 20, got {}",
                self.format.max_fraction_digits
            )));
        }
        if !(1..=12).contains(&self.format.exponent_digits) {
            return Err(CalcError::config(format!(
                "format.exponent_digits must be between 1 and 12, got {}",
                self.format.exponent_digits
            )));
        }
        if self.features.history && self.history_capacity == 0 {
            return Err(CalcError::config(
                "history_capacity must be at least 1 when history is enabled",
            ));
        }
        if self.max_entry_digits == 0 {
            return Err(CalcError::config("max_entry_digits must be at least 1"));
        }
        Ok(())
    }
}
