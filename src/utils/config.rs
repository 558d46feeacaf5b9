/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable and parses it into `T`
///
/// Falls back to `default` when the variable is absent or fails to parse;
/// a parse failure is logged so a typo in `.env` does not pass silently.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    T::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    raw.parse().unwrap_or_else(|_| {
        error!("Failed to parse {env_var}: {raw}, using default");
        default
    })
}
