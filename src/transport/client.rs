/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Authenticated request wrapper
//!
//! Injects the `Authorization: Bearer` header on every request and applies
//! the fixed single-retry policy: on `401 Unauthorized` the token is
//! refreshed once and the request reissued exactly once more. Nothing else
//! is retried; 5xx responses and transport errors propagate as-is.

use crate::error::AppError;
use crate::session::token::TokenStore;
use crate::transport::http_client::{HttpResponse, HttpTransport};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// HTTP client that layers bearer authentication over a raw transport
pub struct AuthenticatedClient<T: HttpTransport> {
    transport: Arc<T>,
    tokens: Arc<TokenStore<T>>,
}

impl<T: HttpTransport> AuthenticatedClient<T> {
    /// Creates a new authenticated client
    pub fn new(transport: Arc<T>, tokens: Arc<TokenStore<T>>) -> Self {
        Self { transport, tokens }
    }

    /// Gets the token store shared with this client
    pub fn tokens(&self) -> &Arc<TokenStore<T>> {
        &self.tokens
    }

    /// Issues an authenticated GET request
    ///
    /// # Arguments
    /// * `url` - Full URL to request
    /// * `params` - Query parameters
    ///
    /// # Returns
    /// The response of the first attempt when it is not a 401, otherwise the
    /// response of the single post-refresh retry. A failed refresh surfaces
    /// as [`AppError::Auth`].
    pub async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<HttpResponse, AppError> {
        let observed = self.tokens.access_token().await;
        let headers = [("Authorization", format!("Bearer {observed}"))];

        let response = self.transport.get(url, &headers, params).await?;
        if response.status != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        warn!("Unauthorized response, refreshing access token and retrying");
        let token = self.tokens.refresh_after(&observed).await?;
        let headers = [("Authorization", format!("Bearer {token}"))];

        // One retry only; whatever comes back is the caller's answer.
        self.transport.get(url, &headers, params).await
    }

    /// Issues an authenticated GET request and parses the JSON body
    ///
    /// Any non-200 status becomes [`AppError::Unexpected`] carrying the raw
    /// body.
    pub async fn get_json(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Value, AppError> {
        let response = self.get(url, params).await?;

        if response.status != StatusCode::OK {
            return Err(AppError::Unexpected {
                status: response.status,
                body: response.body,
            });
        }

        response.json()
    }
}
