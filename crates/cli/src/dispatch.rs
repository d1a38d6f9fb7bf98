//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the configuration report from flags and the environment.
//! - Route parsed CLI arguments to the command handlers.
//!
//! Invariants:
//! - Flags are applied as overrides after the environment, so they always win.

use anyhow::Result;
use text_to_sql_proxy_config::ConfigLoader;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their handlers and return the exit code.
pub(crate) fn run_command(cli: Cli) -> Result<ExitCode> {
    let report = cli
        .apply_overrides(ConfigLoader::new().from_env())
        .build_with_report();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Config { command } => {
            let outcome = commands::config::run(command, &report, &mut stdout)?;
            Ok(ExitCode::from(outcome))
        }
    }
}
