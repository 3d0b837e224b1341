//! Eval command handler

use calc_keypad::core::Calculator;
use calc_keypad::keymap::parse_sequence;
use tracing::info;

use crate::commands::{EvalArgs, EvalFormat};
use crate::config::{load_variant, CliConfig};
use crate::error::{CliError, CliResult};
use crate::output::{render_display, render_history, render_snapshot_json, render_trace_line};

/// Execute the eval command and return what should be printed
///
/// A calculation that ends in `Error` is still a successful run; only an
/// unreadable script or variant fails.
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<String> {
    if args.script.trim().is_empty() {
        return Err(CliError::invalid_argument("script is empty"));
    }
    let variant = load_variant(&args.variant)?;
    let inputs = parse_sequence(&args.script)?;
    info!(variant = %variant.name, keys = inputs.len(), "evaluating script");

    let trace = args.trace && args.format == EvalFormat::Text && !config.verbosity.is_quiet();
    let mut calc = Calculator::with_config(variant);
    let mut lines = Vec::new();
    for input in inputs {
        let transition = calc.apply(input);
        if trace {
            lines.push(render_trace_line(input, &transition, &calc));
        }
    }

    match args.format {
        EvalFormat::Text => {
            if args.history {
                lines.extend(render_history(&calc));
            }
            lines.push(render_display(&calc));
        }
        EvalFormat::Json => lines.push(render_snapshot_json(&calc.snapshot())?),
    }
    Ok(lines.join("\n"))
}
