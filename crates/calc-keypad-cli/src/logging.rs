//! `tracing` subscriber setup

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogFormat};
use crate::error::{CliError, CliResult};

/// Builds the level filter: `RUST_LOG` if set, else the verbosity default
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global subscriber
///
/// Logs go to `config.log_file` when set, otherwise to stderr. Fails if a
/// subscriber is already installed or the log file cannot be created.
pub fn init(config: &CliConfig) -> CliResult<()> {
    let (writer, ansi) = match &config.log_file {
        Some(path) => (BoxMakeWriter::new(Mutex::new(File::create(path)?)), false),
        None => (
            BoxMakeWriter::new(std::io::stderr),
            config.color.should_color(),
        ),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    #[test]
    fn test_env_filter_follows_verbosity() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter(&CliConfig::new().with_verbosity(Verbosity::Debug));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_init_rejects_unwritable_log_file() {
        let config =
            CliConfig::new().with_log_file(Some("/nonexistent/dir/calc.log".into()));
        assert!(matches!(init(&config), Err(CliError::Io(_))));
    }
}
