use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the TD Ameritrade API
pub struct Credentials {
    /// Short-lived bearer access token. May be empty at process start; it is
    /// obtained via the refresh grant on the first `401 Unauthorized`.
    pub access_token: String,
    /// Long-lived refresh token used to obtain new access tokens
    pub refresh_token: String,
    /// OAuth client id of the application
    pub client_id: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the TD Ameritrade REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the TD Ameritrade API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Account ids the client operates on. Empty means "all accounts visible
    /// to the credential".
    pub account_ids: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Reads `ACCESS_TOKEN` (optional), `REFRESH_TOKEN`, `CLIENT_ID`,
    /// `TD_ACCOUNT_IDS` (comma separated), `TD_REST_BASE_URL` and
    /// `TD_REST_TIMEOUT`, loading a `.env` file first when present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token = get_env_or_default("ACCESS_TOKEN", String::new());
        let refresh_token = get_env_or_default("REFRESH_TOKEN", String::new());
        let client_id = get_env_or_default("CLIENT_ID", String::new());

        if refresh_token.is_empty() {
            error!("REFRESH_TOKEN not found in environment variables or .env file");
        }
        if client_id.is_empty() {
            error!("CLIENT_ID not found in environment variables or .env file");
        }

        let account_ids = get_env_or_default("TD_ACCOUNT_IDS", String::new());
        let account_ids = account_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Config {
            credentials: Credentials {
                access_token,
                refresh_token,
                client_id,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("TD_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("TD_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            account_ids,
        }
    }

    /// Creates a configuration from explicit credentials
    ///
    /// # Arguments
    /// * `access_token` - Current access token, or `None` to start without one
    /// * `refresh_token` - Long-lived refresh token
    /// * `client_id` - OAuth client id
    pub fn with_credentials(
        access_token: Option<String>,
        refresh_token: String,
        client_id: String,
    ) -> Self {
        Config {
            credentials: Credentials {
                access_token: access_token.unwrap_or_default(),
                refresh_token,
                client_id,
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            account_ids: Vec::new(),
        }
    }

    /// Sets the account ids the client operates on
    #[must_use]
    pub fn with_account_ids(mut self, account_ids: Vec<String>) -> Self {
        self.account_ids = account_ids;
        self
    }

    /// Full URL of the OAuth token endpoint
    #[must_use]
    pub fn token_url(&self) -> String {
        format!("{}{}", self.rest_api.base_url, crate::constants::TOKEN_PATH)
    }
}
