/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads `env_var` and parses it into `T`, falling back to `default` when the
/// variable is unset, empty, or fails to parse.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match get_env_or_none(env_var) {
        Some(value) => value,
        None => {
            match env::var(env_var) {
                Ok(raw) if !raw.trim().is_empty() => {
                    warn!("Failed to parse {}: {}, using default", env_var, raw);
                }
                _ => {}
            }
            default
        }
    }
}

/// Reads `env_var` and parses it into `T`.
///
/// Returns `None` when the variable is unset, blank, or not parseable.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<T>().ok()
}
