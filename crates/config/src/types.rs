//! Configuration record for the text-to-SQL proxy.
//!
//! Responsibilities:
//! - Define the flat, immutable `Config` record produced by the loader.
//! - Derive the TLS capability from the certificate/key pair.
//!
//! Does NOT handle:
//! - Reading environment variables or applying fallbacks (see `loader` module).
//! - Verifying that TLS paths exist (left to the component that terminates TLS).
//!
//! Invariants:
//! - `Config::default()` carries exactly the documented defaults.
//! - `tls_enabled()` is recomputed on every call; it is never stored.

use serde::Serialize;
use std::path::Path;

use crate::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_DATABASE, DEFAULT_PORT, DEFAULT_PROVIDER};

/// Runtime configuration for the proxy service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// TCP port the service binds (1-65535).
    pub port: u16,
    /// Allowed CORS origin, taken verbatim.
    pub allowed_origin: String,
    /// Upstream language-model provider selector (e.g. "claude").
    pub provider: String,
    /// Target database selector (e.g. "DuckDB").
    pub database: String,
    /// Path to the TLS certificate. Empty when unset.
    pub tls_cert: String,
    /// Path to the TLS private key. Empty when unset.
    pub tls_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            provider: DEFAULT_PROVIDER.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            tls_cert: String::new(),
            tls_key: String::new(),
        }
    }
}

impl Config {
    /// Returns true when both a certificate and a key path are configured.
    pub fn tls_enabled(&self) -> bool {
        !self.tls_cert.is_empty() && !self.tls_key.is_empty()
    }

    /// Returns true when exactly one half of the TLS pair is configured.
    ///
    /// TLS stays disabled in that case; callers may want to warn about it.
    pub fn tls_partial(&self) -> bool {
        self.tls_cert.is_empty() != self.tls_key.is_empty()
    }

    /// Certificate and key paths, if TLS is enabled.
    pub fn tls_paths(&self) -> Option<(&Path, &Path)> {
        self.tls_enabled()
            .then(|| (Path::new(&self.tls_cert), Path::new(&self.tls_key)))
    }
}
