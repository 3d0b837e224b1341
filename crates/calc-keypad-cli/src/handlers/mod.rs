//! Command handlers - one module per subcommand family
//!
//! Handlers that produce text return it instead of printing, so `main`
//! owns stdout and the tests can inspect the output directly.

pub mod eval;
pub mod info;
pub mod run;

pub use eval::execute_eval;
pub use info::{execute_config, execute_layout, execute_variants};
pub use run::execute_run;
