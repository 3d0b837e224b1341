//! Display formatting for calculator values

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Text shown on the display after a failed evaluation
pub const ERROR_SENTINEL: &str = "Error";

/// Rules for rendering a value on a fixed-width display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Longest rendering shown in plain notation
    pub max_display_len: usize,
    /// Fractional digits kept when trimming floating-point noise
    pub max_fraction_digits: usize,
    /// Mantissa fraction digits in exponential notation
    pub exponent_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            max_display_len: 12,
            max_fraction_digits: 10,
            exponent_digits: 6,
        }
    }
}

impl NumberFormat {
    /// Magnitudes at or above this switch to exponential notation when too long
    pub const LARGE_THRESHOLD: f64 = 1e12;
    /// Non-zero magnitudes below this always use exponential notation
    pub const SMALL_THRESHOLD: f64 = 1e-6;

    /// Formats a value for the display.
    ///
    /// Non-finite values render as [`ERROR_SENTINEL`]; evaluation never
    /// produces them, so seeing one means the caller skipped [`crate::core::evaluate`].
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return ERROR_SENTINEL.to_string();
        }

        let magnitude = value.abs();
        if magnitude != 0.0 && magnitude < Self::SMALL_THRESHOLD {
            return self.exponential(value);
        }

        let plain = normalize_zero(trim_fraction(format!(
            "{:.*}",
            self.max_fraction_digits, value
        )));
        if plain.len() <= self.max_display_len {
            return plain;
        }
        if magnitude >= Self::LARGE_THRESHOLD {
            return self.exponential(value);
        }

        // Spend whatever width the integer part leaves on fraction digits
        let int_len =
            format!("{:.0}", magnitude.trunc()).len() + usize::from(value.is_sign_negative());
        let decimals = self
            .max_display_len
            .saturating_sub(int_len + 1)
            .min(self.max_fraction_digits);
        let fitted = normalize_zero(trim_fraction(format!("{value:.decimals$}")));
        if fitted.len() <= self.max_display_len {
            fitted
        } else {
            self.exponential(value)
        }
    }

    /// Formats a value in `1.234568e+15` notation
    #[must_use]
    pub fn exponential(&self, value: f64) -> String {
        let raw = format!("{:.*e}", self.exponent_digits, value);
        let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let mantissa = trim_fraction(mantissa.to_string());
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    }
}

/// Reads the display text back as a number
pub fn parse_display(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber(text.to_string())),
    }
}

fn trim_fraction(text: String) -> String {
    if text.contains('.') && !text.contains('e') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else if let Some((mantissa, exponent)) = text.split_once('e') {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        format!("{mantissa}e{exponent}")
    } else {
        text
    }
}

fn normalize_zero(text: String) -> String {
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
