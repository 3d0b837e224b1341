//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// calc-keypad: keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calc-keypad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Log line format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive terminal calculator
    Run(RunArgs),

    /// Feed a key script to the calculator and print the result
    ///
    /// Scripts use the keyboard mapping: digits, `.`, `+ - * /`, `=`, `%`,
    /// `n` for the sign toggle and `c` for clear. Whitespace separated
    /// names such as `CE`, `MR`, `M+` or `backspace` are also accepted.
    Eval(EvalArgs),

    /// List the built-in variants and their affordances
    Variants,

    /// Print the keypad grid of a variant
    Layout(VariantArgs),

    /// Print the resolved variant configuration as YAML
    Config(VariantArgs),
}

/// Variant selection shared by every command that builds a calculator
#[derive(Args, Debug, Clone)]
pub struct VariantArgs {
    /// Built-in variant (basic, standard, memory, history, full)
    #[arg(long, env = "CALC_KEYPAD_VARIANT", default_value = "standard")]
    pub variant: String,

    /// YAML variant file; takes precedence over --variant
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Default for VariantArgs {
    fn default() -> Self {
        Self {
            variant: "standard".to_string(),
            config: None,
        }
    }
}

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Variant selection
    #[command(flatten)]
    pub variant: VariantArgs,
}

/// Arguments for the eval command
#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    /// Key script, e.g. "12+7=" or "5 M+ C MR"
    pub script: String,

    /// Variant selection
    #[command(flatten)]
    pub variant: VariantArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: EvalFormat,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Print recorded calculations before the display
    #[arg(long)]
    pub history: bool,
}

/// Output format for the eval command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvalFormat {
    /// Display text only
    #[default]
    Text,
    /// Full calculator snapshot as JSON
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormatArg {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for crate::config::LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_run_command() {
            let cli = Cli::parse_from(["calc-keypad", "run"]);
            assert!(matches!(cli.command, Commands::Run(_)));
        }

        #[test]
        fn test_parse_run_with_variant() {
            let cli = Cli::parse_from(["calc-keypad", "run", "--variant", "full"]);
            let Commands::Run(args) = cli.command else {
                panic!("expected run command");
            };
            assert_eq!(args.variant.variant, "full");
            assert!(args.variant.config.is_none());
        }

        #[test]
        fn test_parse_eval_command() {
            let cli = Cli::parse_from(["calc-keypad", "eval", "5+3="]);
            let Commands::Eval(args) = cli.command else {
                panic!("expected eval command");
            };
            assert_eq!(args.script, "5+3=");
            assert_eq!(args.format, EvalFormat::Text);
            assert!(!args.trace);
            assert!(!args.history);
        }

        #[test]
        fn test_parse_eval_history() {
            let cli = Cli::parse_from(["calc-keypad", "eval", "--history", "1+1="]);
            let Commands::Eval(args) = cli.command else {
                panic!("expected eval command");
            };
            assert!(args.history);
        }

        #[test]
        fn test_parse_eval_json_trace() {
            let cli = Cli::parse_from([
                "calc-keypad",
                "eval",
                "--format",
                "json",
                "--trace",
                "--config",
                "calc.yaml",
                "1+1=",
            ]);
            let Commands::Eval(args) = cli.command else {
                panic!("expected eval command");
            };
            assert_eq!(args.format, EvalFormat::Json);
            assert!(args.trace);
            assert_eq!(args.variant.config, Some(PathBuf::from("calc.yaml")));
        }

        #[test]
        fn test_parse_variants_command() {
            let cli = Cli::parse_from(["calc-keypad", "variants"]);
            assert!(matches!(cli.command, Commands::Variants));
        }

        #[test]
        fn test_parse_layout_and_config() {
            let cli = Cli::parse_from(["calc-keypad", "layout", "--variant", "basic"]);
            assert!(matches!(cli.command, Commands::Layout(ref a) if a.variant == "basic"));

            let cli = Cli::parse_from(["calc-keypad", "config"]);
            assert!(matches!(cli.command, Commands::Config(_)));
        }

        #[test]
        fn test_missing_script_rejected() {
            assert!(Cli::try_parse_from(["calc-keypad", "eval"]).is_err());
        }

        #[test]
        fn test_missing_subcommand_rejected() {
            assert!(Cli::try_parse_from(["calc-keypad"]).is_err());
        }
    }

    mod global_flag_tests {
        use super::*;
        use crate::config::{ColorChoice, LogFormat};

        #[test]
        fn test_verbose_count() {
            let cli = Cli::parse_from(["calc-keypad", "-vvv", "variants"]);
            assert_eq!(cli.verbose, 3);
            assert!(!cli.quiet);
        }

        #[test]
        fn test_global_flags_after_subcommand() {
            let cli = Cli::parse_from([
                "calc-keypad",
                "variants",
                "-q",
                "--color",
                "never",
                "--log-format",
                "json",
                "--log-file",
                "calc.log",
            ]);
            assert!(cli.quiet);
            assert_eq!(cli.color, ColorArg::Never);
            assert_eq!(cli.log_format, LogFormatArg::Json);
            assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
        }

        #[test]
        fn test_color_arg_conversion() {
            assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
            assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
            assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
        }

        #[test]
        fn test_log_format_conversion() {
            assert_eq!(LogFormat::from(LogFormatArg::Text), LogFormat::Text);
            assert_eq!(LogFormat::from(LogFormatArg::Json), LogFormat::Json);
        }
    }
}
