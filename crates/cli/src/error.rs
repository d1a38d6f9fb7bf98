//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map config command outcomes to exit codes.
//!
//! Invariants:
//! - Codes match the wider family of workspace CLIs: 1 is a generic failure,
//!   5 is a validation failure.

use crate::commands::config::Outcome;

/// Structured exit codes for text-to-sql-proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - the configuration has problems.
    ///
    /// Scripts should fix the configuration and not retry unchanged.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Ok => ExitCode::Success,
            Outcome::ProblemsFound => ExitCode::ValidationError,
        }
    }
}
