#![allow(dead_code)]

use once_cell::sync::Lazy;
use td_client::config::Config;
use td_client::utils::logger::setup_logger;

static LOGGER: Lazy<()> = Lazy::new(setup_logger);

/// Initialises logging once for the whole test binary
pub fn init() {
    Lazy::force(&LOGGER);
}

/// Creates a test config pointed at a mock server
pub fn test_config(server_url: &str) -> Config {
    let mut config = Config::with_credentials(
        Some("stale".to_string()),
        "test_refresh_token".to_string(),
        "test_client_id".to_string(),
    );
    config.rest_api.base_url = server_url.to_string();
    config
}
