//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit overrides,
//!   environment values and defaults.
//! - Load `.env` files on request, gated by `DOTENV_DISABLED`.
//! - Build the final `Config`, optionally with a `LoadReport`.
//!
//! Does NOT handle:
//! - Environment variable parsing details (delegated to env.rs).
//! - Validating TLS paths or selector strings (left to consumers).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables,
//!   regardless of call order.
//! - Environment variables take precedence over defaults.
//! - `build()` never fails.

use super::env::{EnvSource, ProcessEnv, apply_env};
use super::error::ConfigError;
use super::report::{Fallback, LoadReport, Sourced};
use crate::constants::{
    DEFAULT_ALLOWED_ORIGIN, DEFAULT_DATABASE, DEFAULT_PORT, DEFAULT_PROVIDER, ENV_DOTENV_DISABLED,
};
use crate::types::Config;

/// Configuration loader that builds config from overrides and the environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    port: Sourced<u16>,
    allowed_origin: Sourced<String>,
    provider: Sourced<String>,
    database: Sourced<String>,
    tls_cert: Sourced<String>,
    tls_key: Sourced<String>,
    fallbacks: Vec<Fallback>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded. Variables already present in the process environment are
    /// never overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from the process environment.
    pub fn from_env(self) -> Self {
        self.from_source(&ProcessEnv)
    }

    /// Read configuration from an explicit environment snapshot.
    pub fn from_source(mut self, source: &impl EnvSource) -> Self {
        apply_env(&mut self, source);
        self
    }

    /// Set the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port.set_explicit(port);
        self
    }

    /// Set the allowed origin.
    pub fn with_allowed_origin(mut self, origin: String) -> Self {
        self.allowed_origin.set_explicit(origin);
        self
    }

    /// Set the provider selector.
    pub fn with_provider(mut self, provider: String) -> Self {
        self.provider.set_explicit(provider);
        self
    }

    /// Set the database selector.
    pub fn with_database(mut self, database: String) -> Self {
        self.database.set_explicit(database);
        self
    }

    /// Set the TLS certificate path.
    pub fn with_tls_cert(mut self, path: String) -> Self {
        self.tls_cert.set_explicit(path);
        self
    }

    /// Set the TLS key path.
    pub fn with_tls_key(mut self, path: String) -> Self {
        self.tls_key.set_explicit(path);
        self
    }

    pub(crate) fn set_env_port(&mut self, port: u16) {
        self.port.set_env(port);
    }

    pub(crate) fn set_env_allowed_origin(&mut self, origin: String) {
        self.allowed_origin.set_env(origin);
    }

    pub(crate) fn set_env_provider(&mut self, provider: String) {
        self.provider.set_env(provider);
    }

    pub(crate) fn set_env_database(&mut self, database: String) {
        self.database.set_env(database);
    }

    pub(crate) fn set_env_tls_cert(&mut self, path: String) {
        self.tls_cert.set_env(path);
    }

    pub(crate) fn set_env_tls_key(&mut self, path: String) {
        self.tls_key.set_env(path);
    }

    pub(crate) fn record_fallback(&mut self, fallback: Fallback) {
        self.fallbacks.push(fallback);
    }

    /// Build the final configuration.
    pub fn build(self) -> Config {
        self.build_with_report().into_config()
    }

    /// Build the final configuration along with its provenance.
    pub fn build_with_report(self) -> LoadReport {
        let (port, port_src) = self.port.resolve(|| DEFAULT_PORT);
        let (allowed_origin, origin_src) = self
            .allowed_origin
            .resolve(|| DEFAULT_ALLOWED_ORIGIN.to_string());
        let (provider, provider_src) = self.provider.resolve(|| DEFAULT_PROVIDER.to_string());
        let (database, database_src) = self.database.resolve(|| DEFAULT_DATABASE.to_string());
        let (tls_cert, cert_src) = self.tls_cert.resolve(String::new);
        let (tls_key, key_src) = self.tls_key.resolve(String::new);

        let config = Config {
            port,
            allowed_origin,
            provider,
            database,
            tls_cert,
            tls_key,
        };
        tracing::debug!(
            port = config.port,
            provider = %config.provider,
            database = %config.database,
            tls_enabled = config.tls_enabled(),
            "configuration loaded"
        );

        LoadReport::new(
            config,
            [
                port_src,
                origin_src,
                provider_src,
                database_src,
                cert_src,
                key_src,
            ],
            self.fallbacks,
        )
    }
}
