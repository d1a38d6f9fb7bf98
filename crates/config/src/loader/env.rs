//! Environment variable access and parsing for configuration.
//!
//! Responsibilities:
//! - Abstract the environment behind `EnvSource` so loading can run against
//!   the process environment or an explicit snapshot.
//! - Apply environment values to a `ConfigLoader`.
//! - Parse and range-check the port value.
//!
//! Does NOT handle:
//! - Building the final `Config` (see builder.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Unset and empty variables are treated the same way.
//! - Non-empty string values are used verbatim (no trimming).
//! - An invalid port never produces an error; it is recorded as a fallback.
//! - A value that is not valid UTF-8 is treated as unset and recorded as a
//!   fallback, so a dropped TLS path does not go unnoticed.

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

use super::builder::ConfigLoader;
use super::report::{Fallback, FallbackReason};
use crate::constants::{
    ENV_ALLOWED_ORIGIN, ENV_DATABASE, ENV_PORT, ENV_PROVIDER, ENV_TLS_CERT, ENV_TLS_KEY,
};

/// A read-only view of environment variables.
///
/// Mirrors `std::env::var`: a missing key is `VarError::NotPresent`, a value
/// that is not valid UTF-8 is `VarError::NotUnicode`.
pub trait EnvSource {
    fn var(&self, key: &str) -> Result<String, VarError>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Read an environment variable, returning None if unset, empty or not UTF-8.
pub fn env_var_or_none(key: &str) -> Option<String> {
    ProcessEnv.var(key).ok().filter(|value| !value.is_empty())
}

/// Parse a port number, accepting only integers in `1..=65535`.
pub fn parse_port(raw: &str) -> Option<u16> {
    classify_port(raw).ok()
}

fn classify_port(raw: &str) -> Result<u16, FallbackReason> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FallbackReason::NotANumber);
    }
    // Any integer literal that does not fit is out of range, however long.
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(FallbackReason::OutOfRange),
    }
}

fn reject(
    loader: &mut ConfigLoader,
    var: &'static str,
    value: String,
    reason: FallbackReason,
) {
    tracing::warn!(var, value = %value, %reason, "ignoring invalid value, using default");
    loader.record_fallback(Fallback { var, value, reason });
}

/// Read a non-empty value, recording a fallback when it is not valid UTF-8.
fn read(
    loader: &mut ConfigLoader,
    source: &impl EnvSource,
    var: &'static str,
) -> Option<String> {
    match source.var(var) {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) | Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            let value = raw.to_string_lossy().into_owned();
            reject(loader, var, value, FallbackReason::NotUnicode);
            None
        }
    }
}

/// Apply environment configuration to the loader.
///
/// Explicit overrides already set on the loader are left untouched.
pub fn apply_env(loader: &mut ConfigLoader, source: &impl EnvSource) {
    if let Some(raw) = read(loader, source, ENV_PORT) {
        match classify_port(&raw) {
            Ok(port) => loader.set_env_port(port),
            Err(reason) => reject(loader, ENV_PORT, raw, reason),
        }
    }
    if let Some(origin) = read(loader, source, ENV_ALLOWED_ORIGIN) {
        loader.set_env_allowed_origin(origin);
    }
    if let Some(provider) = read(loader, source, ENV_PROVIDER) {
        loader.set_env_provider(provider);
    }
    if let Some(database) = read(loader, source, ENV_DATABASE) {
        loader.set_env_database(database);
    }
    if let Some(cert) = read(loader, source, ENV_TLS_CERT) {
        loader.set_env_tls_cert(cert);
    }
    if let Some(key) = read(loader, source, ENV_TLS_KEY) {
        loader.set_env_tls_key(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_port_accepts_valid_range() {
        assert_eq!(parse_port("1"), Some(1));
        assert_eq!(parse_port("3000"), Some(3000));
        assert_eq!(parse_port("8080"), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
    }

    #[test]
    fn test_parse_port_rejects_invalid_input() {
        for raw in ["", "abc", "0", "-1", "65536", "99999999999999999999", " 8080", "80.5"] {
            assert_eq!(parse_port(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_classify_port_reasons() {
        assert_eq!(classify_port("abc"), Err(FallbackReason::NotANumber));
        assert_eq!(classify_port("0"), Err(FallbackReason::OutOfRange));
        assert_eq!(classify_port("-1"), Err(FallbackReason::OutOfRange));
        assert_eq!(classify_port("65536"), Err(FallbackReason::OutOfRange));
        assert_eq!(classify_port("-"), Err(FallbackReason::NotANumber));
        assert_eq!(classify_port("+8080"), Ok(8080));
    }

    #[test]
    fn test_classify_port_overflow_is_out_of_range() {
        for raw in [
            "99999999999999999999",
            "-99999999999999999999",
            "340282366920938463463374607431768211456",
        ] {
            assert_eq!(
                classify_port(raw),
                Err(FallbackReason::OutOfRange),
                "{raw:?} is an integer and should be out of range"
            );
        }
    }

    #[test]
    fn test_map_sources() {
        let mut hash = HashMap::new();
        hash.insert("KEY".to_string(), "value".to_string());
        assert_eq!(hash.var("KEY"), Ok("value".to_string()));
        assert_eq!(hash.var("MISSING"), Err(VarError::NotPresent));

        let tree: BTreeMap<String, String> =
            [("KEY".to_string(), String::new())].into_iter().collect();
        assert_eq!(tree.var("KEY"), Ok(String::new()));

        let mut loader = ConfigLoader::new();
        assert_eq!(read(&mut loader, &tree, "KEY"), None);
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_strings() {
        let key = "_TEXT_TO_SQL_PROXY_TEST_VAR";
        temp_env::with_var_unset(key, || {
            assert!(env_var_or_none(key).is_none(), "Unset env var should return None");
        });

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "Empty env var should return None");
        });

        temp_env::with_vars([(key, Some(" value "))], || {
            assert_eq!(
                env_var_or_none(key),
                Some(" value ".to_string()),
                "Non-empty env var should be returned verbatim"
            );
        });
    }
}
