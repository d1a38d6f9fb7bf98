//! Centralized constants for the text-to-SQL proxy configuration.
//!
//! Environment variable names and the default value of every field live here
//! so the loader, the report and the CLI agree on them.

// =============================================================================
// Environment Variable Names
// =============================================================================

/// TCP port the proxy binds.
pub const ENV_PORT: &str = "TEXT_TO_SQL_PROXY_PORT";

/// Allowed CORS origin.
pub const ENV_ALLOWED_ORIGIN: &str = "TEXT_TO_SQL_PROXY_ALLOWED_ORIGIN";

/// Upstream language-model provider selector.
pub const ENV_PROVIDER: &str = "TEXT_TO_SQL_PROXY_PROVIDER";

/// Target database dialect selector.
pub const ENV_DATABASE: &str = "TEXT_TO_SQL_PROXY_DATABASE";

/// Path to the TLS certificate (PEM).
pub const ENV_TLS_CERT: &str = "TEXT_TO_SQL_PROXY_TLS_CERT";

/// Path to the TLS private key (PEM).
pub const ENV_TLS_KEY: &str = "TEXT_TO_SQL_PROXY_TLS_KEY";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Every variable the loader reads, in field order.
pub const ALL_ENV_VARS: [&str; 6] = [
    ENV_PORT,
    ENV_ALLOWED_ORIGIN,
    ENV_PROVIDER,
    ENV_DATABASE,
    ENV_TLS_CERT,
    ENV_TLS_KEY,
];

// =============================================================================
// Defaults
// =============================================================================

/// Default listening port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default allowed origin.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://sql-workbench.com";

/// Default provider selector.
pub const DEFAULT_PROVIDER: &str = "claude";

/// Default database selector.
pub const DEFAULT_DATABASE: &str = "DuckDB";
