/// Environment variable parsing helpers
pub mod config;
/// Logging setup
pub mod logger;
