//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn global flags into `ConfigLoader` overrides.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read `TEXT_TO_SQL_PROXY_*` variables; the loader does, so that
//!   invalid values fall back to defaults instead of failing argument parsing.

use clap::{Parser, Subcommand};
use text_to_sql_proxy_config::ConfigLoader;

use crate::commands;

#[derive(Parser)]
#[command(name = "text-to-sql-proxy")]
#[command(about = "Text-to-SQL proxy - inspect and validate runtime configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  text-to-sql-proxy config show\n  text-to-sql-proxy --port 8080 config show --output json\n  text-to-sql-proxy --tls-cert cert.pem --tls-key key.pem config check\n"
)]
pub struct Cli {
    /// TCP port the proxy binds (overrides TEXT_TO_SQL_PROXY_PORT)
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Allowed CORS origin (overrides TEXT_TO_SQL_PROXY_ALLOWED_ORIGIN)
    #[arg(long, global = true)]
    pub allowed_origin: Option<String>,

    /// Language-model provider (overrides TEXT_TO_SQL_PROXY_PROVIDER)
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Target database (overrides TEXT_TO_SQL_PROXY_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// TLS certificate path (overrides TEXT_TO_SQL_PROXY_TLS_CERT)
    #[arg(long, global = true, value_name = "FILE")]
    pub tls_cert: Option<String>,

    /// TLS private key path (overrides TEXT_TO_SQL_PROXY_TLS_KEY)
    #[arg(long, global = true, value_name = "FILE")]
    pub tls_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

impl Cli {
    /// Apply the global flags to a loader as explicit overrides.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(port) = self.port {
            loader = loader.with_port(port);
        }
        if let Some(ref origin) = self.allowed_origin {
            loader = loader.with_allowed_origin(origin.clone());
        }
        if let Some(ref provider) = self.provider {
            loader = loader.with_provider(provider.clone());
        }
        if let Some(ref database) = self.database {
            loader = loader.with_database(database.clone());
        }
        if let Some(ref cert) = self.tls_cert {
            loader = loader.with_tls_cert(cert.clone());
        }
        if let Some(ref key) = self.tls_key {
            loader = loader.with_tls_key(key.clone());
        }
        loader
    }
}
