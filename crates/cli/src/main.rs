//! Text-to-SQL proxy - command-line entry point.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging.
//! - Show and check the runtime configuration built by `text-to-sql-proxy-config`.
//!
//! Does NOT handle:
//! - Serving requests; the proxy itself consumes the same `Config`.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible
//!   to the loader.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use text_to_sql_proxy_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run_command(cli) {
        Ok(ExitCode::Success) => {}
        Ok(code) => std::process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
