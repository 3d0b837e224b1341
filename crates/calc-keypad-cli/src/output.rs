//! Output formatting for the non-interactive commands
//!
//! Every renderer returns a `String` so handlers stay trivial to test.
//! Styling goes through `console`, which drops the escape codes when colors
//! are disabled.

use calc_keypad::core::{Calculator, Input, Snapshot, Transition};
use calc_keypad::layout::Keypad;
use calc_keypad::variant::VariantConfig;
use console::style;

use crate::error::CliResult;

/// One line of `eval --trace` output
#[must_use]
pub fn render_trace_line(input: Input, transition: &Transition, calc: &Calculator) -> String {
    let key = format!("{:<3}", input.label());
    let display = format!("{:>16}", calc.display());
    match transition {
        Transition::Applied => format!("{key} {}  {}", style(display).bold(), calc.expression()),
        Transition::Ignored => format!("{key} {}  (ignored)", style(display).dim()),
        Transition::Failed(e) => format!("{key} {}  ({e})", style(display).red().bold()),
    }
}

/// Final display line for `eval`
#[must_use]
pub fn render_display(calc: &Calculator) -> String {
    if calc.is_error() {
        style(calc.display()).red().bold().to_string()
    } else {
        calc.display().to_string()
    }
}

/// Recorded calculations for `eval --history`, oldest first
#[must_use]
pub fn render_history(calc: &Calculator) -> Option<String> {
    let history = calc.history();
    if history.is_empty() {
        return None;
    }
    Some(style(history.export_formatted()).dim().to_string())
}

/// Pretty JSON for a calculator snapshot
pub fn render_snapshot_json(snapshot: &Snapshot) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Listing for the `variants` command
#[must_use]
pub fn render_variants(variants: &[VariantConfig]) -> String {
    let mut out = String::new();
    for variant in variants {
        let features = variant.features.enabled();
        let features = if features.is_empty() {
            "digits and operators only".to_string()
        } else {
            features.join(", ")
        };
        out.push_str(&format!(
            "{:<10} {}\n",
            style(&variant.name).cyan().bold(),
            variant.title
        ));
        out.push_str(&format!("           {}\n", style(features).dim()));
        if variant.features.history {
            out.push_str(&format!(
                "           keeps the last {} calculations\n",
                variant.history_capacity
            ));
        }
    }
    out
}

/// Keypad grid for the `layout` command
#[must_use]
pub fn render_layout(variant: &VariantConfig, keypad: &Keypad) -> String {
    let (rows, cols) = keypad.dimensions();
    format!(
        "{} ({} buttons, {rows}x{cols})\n{keypad}",
        style(&variant.title).bold(),
        keypad.button_count()
    )
}

/// YAML dump for the `config` command
pub fn render_config(variant: &VariantConfig) -> CliResult<String> {
    Ok(serde_yaml_ng::to_string(variant)?)
}
