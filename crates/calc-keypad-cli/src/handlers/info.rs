//! Variant inspection handlers: `variants`, `layout` and `config`

use calc_keypad::layout::Keypad;
use calc_keypad::variant::VariantConfig;

use crate::commands::VariantArgs;
use crate::config::load_variant;
use crate::error::CliResult;
use crate::output::{render_config, render_layout, render_variants};

/// Execute the variants command
#[must_use]
pub fn execute_variants() -> String {
    render_variants(&VariantConfig::presets())
}

/// Execute the layout command
pub fn execute_layout(args: &VariantArgs) -> CliResult<String> {
    let variant = load_variant(args)?;
    let keypad = Keypad::for_variant(&variant);
    Ok(render_layout(&variant, &keypad))
}

/// Execute the config command
pub fn execute_config(args: &VariantArgs) -> CliResult<String> {
    render_config(&load_variant(args)?)
}
