//! Shared test utilities for text-to-sql-proxy integration tests.
//!
//! Invariants / Assumptions:
//! - Every command is hermetic: no `.env` loading and no host
//!   `TEXT_TO_SQL_PROXY_*` variables leak into the test.

use assert_cmd::Command;

/// Every variable the config loader reads.
pub const PROXY_ENV_VARS: [&str; 6] = [
    "TEXT_TO_SQL_PROXY_PORT",
    "TEXT_TO_SQL_PROXY_ALLOWED_ORIGIN",
    "TEXT_TO_SQL_PROXY_PROVIDER",
    "TEXT_TO_SQL_PROXY_DATABASE",
    "TEXT_TO_SQL_PROXY_TLS_CERT",
    "TEXT_TO_SQL_PROXY_TLS_KEY",
];

/// Returns a hermetic `text-to-sql-proxy` command for integration testing.
pub fn proxy_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("text-to-sql-proxy");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in PROXY_ENV_VARS {
        cmd.env_remove(var);
    }

    cmd
}
