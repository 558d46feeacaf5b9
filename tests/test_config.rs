use td_client::config::Config;
use td_client::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT_SECS, TOKEN_PATH};

#[test]
fn with_credentials_populates_fields() {
    let config = Config::with_credentials(
        Some("access".to_string()),
        "refresh".to_string(),
        "client".to_string(),
    );

    assert_eq!(config.credentials.access_token, "access");
    assert_eq!(config.credentials.refresh_token, "refresh");
    assert_eq!(config.credentials.client_id, "client");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT_SECS);
    assert!(config.account_ids.is_empty());
}

#[test]
fn missing_access_token_defaults_to_empty() {
    let config = Config::with_credentials(None, "refresh".to_string(), "client".to_string());
    assert!(config.credentials.access_token.is_empty());
}

#[test]
fn with_account_ids_sets_the_list() {
    let config = Config::with_credentials(None, "refresh".to_string(), "client".to_string())
        .with_account_ids(vec!["A1".to_string(), "B2".to_string()]);
    assert_eq!(config.account_ids, vec!["A1", "B2"]);
}

#[test]
fn token_url_joins_base_and_path() {
    let mut config = Config::with_credentials(None, "refresh".to_string(), "client".to_string());
    config.rest_api.base_url = "http://localhost:9999".to_string();
    assert_eq!(config.token_url(), format!("http://localhost:9999{TOKEN_PATH}"));
}

#[test]
fn version_is_exposed() {
    assert_eq!(td_client::version(), td_client::VERSION);
    assert!(!td_client::VERSION.is_empty());
}
