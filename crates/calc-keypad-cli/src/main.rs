//! calc-keypad: keypad calculator for the terminal

use std::process::ExitCode;

use calc_keypad_cli::{
    handlers, logging, Cli, CliConfig, CliResult, Commands, Verbosity,
};
use clap::Parser;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    console::set_colors_enabled(config.color.should_color());

    // Log lines on stderr would tear the interactive screen
    if !matches!(cli.command, Commands::Run(_)) || config.log_file.is_some() {
        logging::init(&config)?;
    }

    match cli.command {
        Commands::Run(args) => handlers::execute_run(&args),
        Commands::Eval(args) => {
            println!("{}", handlers::execute_eval(&config, &args)?);
            Ok(())
        }
        Commands::Variants => {
            print!("{}", handlers::execute_variants());
            Ok(())
        }
        Commands::Layout(args) => {
            print!("{}", handlers::execute_layout(&args)?);
            Ok(())
        }
        Commands::Config(args) => {
            print!("{}", handlers::execute_config(&args)?);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_format(cli.log_format.into())
        .with_log_file(cli.log_file.clone())
}
