/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Token storage for the TD Ameritrade API
//!
//! Holds the short-lived access token behind a process-wide store and renews
//! it with the long-lived refresh token via the OAuth
//! `grant_type=refresh_token` form post. Refreshes are single-flight: the
//! first caller that observes a stale token performs the provider call while
//! concurrent callers adopt its result instead of issuing duplicates.

use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::HttpTransport;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Process-wide holder of the current bearer access token
///
/// The refresh token and client id are immutable for the process lifetime;
/// only the access token mutates, and only through [`TokenStore::refresh`]
/// or [`TokenStore::set_access_token`].
pub struct TokenStore<T: HttpTransport> {
    config: Arc<Config>,
    transport: Arc<T>,
    access_token: RwLock<String>,
    refresh_guard: Mutex<()>,
}

impl<T: HttpTransport> TokenStore<T> {
    /// Creates a new store seeded with the configured access token
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `transport` - Transport used for the token endpoint call
    pub fn new(config: Arc<Config>, transport: Arc<T>) -> Self {
        let access_token = RwLock::new(config.credentials.access_token.clone());

        Self {
            config,
            transport,
            access_token,
            refresh_guard: Mutex::new(()),
        }
    }

    /// Returns the current access token, possibly empty
    pub async fn access_token(&self) -> String {
        self.access_token.read().await.clone()
    }

    /// Overwrites the current access token
    pub async fn set_access_token(&self, token: String) {
        let mut current = self.access_token.write().await;
        *current = token;
    }

    /// Obtains a new access token from the refresh-token grant
    ///
    /// # Returns
    /// * `Ok(String)` - The new access token, already stored
    /// * `Err(AppError::Auth)` - If the token endpoint answers non-2xx or the
    ///   response lacks an `access_token` field
    pub async fn refresh(&self) -> Result<String, AppError> {
        let _guard = self.refresh_guard.lock().await;
        self.refresh_inner().await
    }

    /// Refreshes only if nobody else already did
    ///
    /// `observed` is the token the caller used for the request that came back
    /// `401`. If the stored token has moved on since then, a concurrent
    /// refresh already happened and its result is returned without another
    /// provider call.
    pub async fn refresh_after(&self, observed: &str) -> Result<String, AppError> {
        let _guard = self.refresh_guard.lock().await;

        let current = self.access_token.read().await.clone();
        if current != observed && !current.is_empty() {
            debug!("Access token already rotated by a concurrent refresh");
            return Ok(current);
        }

        self.refresh_inner().await
    }

    async fn refresh_inner(&self) -> Result<String, AppError> {
        let url = self.config.token_url();
        debug!("Refreshing access token via {}", url);

        let form = [
            ("grant_type", String::from("refresh_token")),
            ("client_id", self.config.credentials.client_id.clone()),
            ("refresh_token", self.config.credentials.refresh_token.clone()),
        ];

        let response = self.transport.post_form(&url, &form).await?;

        if !response.is_success() {
            warn!(
                "Token refresh failed with status {}: {}",
                response.status, response.body
            );
            return Err(AppError::Auth(format!(
                "token refresh returned status {}: {}",
                response.status, response.body
            )));
        }

        let json: Value = response.json()?;
        let token = json
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AppError::Auth(String::from("token refresh response lacks access_token"))
            })?
            .to_string();

        let mut current = self.access_token.write().await;
        *current = token.clone();

        info!("✓ Access token refreshed");
        Ok(token)
    }
}
