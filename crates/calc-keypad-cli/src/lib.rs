//! calc-keypad CLI library
//!
//! Command-line and terminal frontend for the `calc-keypad` state machine:
//! an interactive ratatui calculator, a scriptable `eval` command and
//! helpers to inspect the built-in variants.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, EvalArgs, EvalFormat, LogFormatArg, RunArgs, VariantArgs,
};
pub use config::{load_variant, load_variant_file, CliConfig, ColorChoice, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{
    render_config, render_display, render_layout, render_snapshot_json, render_trace_line,
    render_variants,
};
