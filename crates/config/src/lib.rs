//! Configuration management for the text-to-SQL proxy.
//!
//! This crate provides the `Config` record and the loaders that build it
//! from environment variables, `.env` files and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvSource, Fallback, FallbackReason, Field, LoadReport,
    ProcessEnv, ValueSource, env_var_or_none, load, load_from, parse_port,
};
pub use types::Config;
