//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables and
//!   explicit builder overrides.
//! - Provide `load()`/`load_from()` for the plain silent-default contract.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Verifying TLS paths or provider/database selectors.
//!
//! Invariants / Assumptions:
//! - Overrides > environment > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod report;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{EnvSource, ProcessEnv, env_var_or_none, parse_port};
pub use error::ConfigError;
pub use report::{Fallback, FallbackReason, Field, LoadReport, ValueSource};

use crate::types::Config;

/// Load configuration from the process environment.
///
/// Unset or invalid values fall back to their defaults; this never fails.
pub fn load() -> Config {
    load_from(&ProcessEnv)
}

/// Load configuration from an explicit environment snapshot.
pub fn load_from(source: &impl EnvSource) -> Config {
    ConfigLoader::new().from_source(source).build()
}
