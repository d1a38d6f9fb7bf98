//! Error types for configuration loading.
//!
//! Building a `Config` is infallible; the only fallible step is reading a
//! `.env` file. Dotenv errors NEVER include raw .env line contents so that
//! secrets in the file cannot leak into logs or terminals.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while preparing the environment for loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, not the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
