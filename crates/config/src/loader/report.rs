//! Load reports describing where each configuration value came from.
//!
//! Loading never fails: rejected inputs silently fall back to defaults. A
//! `LoadReport` makes those decisions visible to callers that want them
//! (the CLI `config check` command) without changing the plain `Config`
//! contract.

use std::fmt;

use crate::constants::{
    ENV_ALLOWED_ORIGIN, ENV_DATABASE, ENV_PORT, ENV_PROVIDER, ENV_TLS_CERT, ENV_TLS_KEY,
};
use crate::types::Config;

/// A field of [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Port,
    AllowedOrigin,
    Provider,
    Database,
    TlsCert,
    TlsKey,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 6] = [
        Field::Port,
        Field::AllowedOrigin,
        Field::Provider,
        Field::Database,
        Field::TlsCert,
        Field::TlsKey,
    ];

    /// The environment variable that feeds this field.
    pub fn env_var(self) -> &'static str {
        match self {
            Field::Port => ENV_PORT,
            Field::AllowedOrigin => ENV_ALLOWED_ORIGIN,
            Field::Provider => ENV_PROVIDER,
            Field::Database => ENV_DATABASE,
            Field::TlsCert => ENV_TLS_CERT,
            Field::TlsKey => ENV_TLS_KEY,
        }
    }

    /// Field name as it appears in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Field::Port => "port",
            Field::AllowedOrigin => "allowed_origin",
            Field::Provider => "provider",
            Field::Database => "database",
            Field::TlsCert => "tls_cert",
            Field::TlsKey => "tls_key",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueSource {
    /// Built-in default.
    #[default]
    Default,
    /// Process environment (or an explicit snapshot of it).
    Environment,
    /// Explicit builder override, e.g. a CLI flag.
    Override,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueSource::Default => "default",
            ValueSource::Environment => "env",
            ValueSource::Override => "flag",
        })
    }
}

/// Why an input value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotANumber,
    OutOfRange,
    /// The value is not valid UTF-8 and was treated as unset.
    NotUnicode,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FallbackReason::NotANumber => "not a number",
            FallbackReason::OutOfRange => "must be between 1 and 65535",
            FallbackReason::NotUnicode => "not valid UTF-8",
        })
    }
}

/// An input value that was rejected and replaced by the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub var: &'static str,
    pub value: String,
    pub reason: FallbackReason,
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={:?} ignored ({}), default used",
            self.var, self.value, self.reason
        )
    }
}

/// The loaded configuration together with per-field provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    config: Config,
    sources: [ValueSource; 6],
    fallbacks: Vec<Fallback>,
}

impl LoadReport {
    pub(crate) fn new(config: Config, sources: [ValueSource; 6], fallbacks: Vec<Fallback>) -> Self {
        Self {
            config,
            sources,
            fallbacks,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    pub fn source_of(&self, field: Field) -> ValueSource {
        self.sources[field.index()]
    }

    /// Inputs that were rejected during loading.
    pub fn fallbacks(&self) -> &[Fallback] {
        &self.fallbacks
    }

    pub fn has_fallbacks(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Tracks a single field's value and where it came from.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sourced<T> {
    env: Option<T>,
    explicit: Option<T>,
}

impl<T> Sourced<T> {
    pub(crate) fn set_env(&mut self, value: T) {
        self.env = Some(value);
    }

    pub(crate) fn set_explicit(&mut self, value: T) {
        self.explicit = Some(value);
    }

    /// Resolves the value by precedence: override, environment, default.
    pub(crate) fn resolve(self, default: impl FnOnce() -> T) -> (T, ValueSource) {
        match (self.explicit, self.env) {
            (Some(value), _) => (value, ValueSource::Override),
            (None, Some(value)) => (value, ValueSource::Environment),
            (None, None) => (default(), ValueSource::Default),
        }
    }
}
