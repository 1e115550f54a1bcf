/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Credentials;
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, trimmed
///
/// Unset, non-unicode and blank values all count as absent, so an empty
/// `FISKALY_ORGANIZATION_ID=` line in `.env` behaves like no line at all.
pub fn env_value(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Parses an environment variable, `None` when absent or unparseable
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    let raw = env_value(env_var)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: cannot parse '{}'", env_var, raw);
            None
        }
    }
}

/// Parses an environment variable, falling back to `default`
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T {
    get_env_or_none(env_var).unwrap_or(default)
}

/// Reads a key/secret pair; both halves must be present
///
/// A lone key or secret is reported and treated as no credentials at all.
pub fn get_env_credentials(key_var: &str, secret_var: &str) -> Option<Credentials> {
    match (env_value(key_var), env_value(secret_var)) {
        (Some(key), Some(secret)) => Some(Credentials::new(key, secret)),
        (None, None) => None,
        _ => {
            warn!(
                "Only one of {} and {} is set, ignoring both",
                key_var, secret_var
            );
            None
        }
    }
}
