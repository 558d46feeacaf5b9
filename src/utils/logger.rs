use crate::utils::config::get_env_or_default;
use std::str::FromStr;
use tracing::Level;

/// Sets up the global tracing subscriber
///
/// The log level is read from the `LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn`, `error`), defaulting to `info`.
/// Calling it more than once is harmless; later calls are ignored.
pub fn setup_logger() {
    let level = get_env_or_default("LOGLEVEL", String::from("info"));
    let level = Level::from_str(&level).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
