/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Gets a non-blank environment variable, trimmed
///
/// Blank values are treated as missing so that `KEY=` in a `.env` file does not
/// count as configured.
pub fn get_env_non_empty(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses an environment variable, `None` when unset, blank or unparsable
///
/// An unparsable value is logged with a warning naming the variable.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    let raw = get_env_non_empty(env_var)?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: {}", env_var, raw);
            None
        }
    }
}

/// Parses an environment variable, falling back to `default`
///
/// # Arguments
/// * `env_var` - Name of the environment variable, e.g. `GOOGLE_ADS_REST_TIMEOUT`
/// * `default` - Value used when the variable is unset, blank or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T {
    get_env_or_none(env_var).unwrap_or(default)
}
