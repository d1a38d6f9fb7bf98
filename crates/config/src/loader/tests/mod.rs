//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests that touch process-global state (env vars, cwd) use `serial_test`
//!   and `global_test_lock()`.
//! - Tests that only need an environment snapshot use a `BTreeMap` source
//!   and need no locking.

use std::collections::BTreeMap;
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Builds an explicit environment snapshot from key/value pairs.
pub fn snapshot<const N: usize>(vars: [(&str, &str); N]) -> BTreeMap<String, String> {
    vars.into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Every recognised variable set to `None`, for use with `temp_env`.
pub fn all_unset() -> Vec<(&'static str, Option<&'static str>)> {
    crate::constants::ALL_ENV_VARS
        .iter()
        .map(|var| (*var, None))
        .collect()
}
