/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! HTTP transport seam
//!
//! [`HttpTransport`] is the boundary to the raw network: it knows nothing
//! about tokens or resources, it only moves bytes. The production
//! implementation is [`ReqwestTransport`]; everything above it (token
//! refresh, the 401 retry, the resource methods) is generic over the trait.

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP response with the body already drained
///
/// Responses are small JSON documents, so the body is read eagerly; this also
/// lets error paths carry the raw text for diagnostics.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Returns true for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Raw HTTP transport consumed by the client layers
///
/// Implementations handle TLS, connection reuse and timeouts. Network
/// failures surface as [`AppError::Request`], distinct from HTTP-status
/// errors which are reported through [`HttpResponse::status`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request
    ///
    /// # Arguments
    /// * `url` - Full URL to request
    /// * `headers` - Header name/value pairs
    /// * `params` - Query parameters
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, String)],
        params: &[(&str, String)],
    ) -> Result<HttpResponse, AppError>;

    /// Issues a POST request with a form-encoded body
    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
    ) -> Result<HttpResponse, AppError>;
}

/// [`HttpTransport`] implementation backed by a pooled reqwest client
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the user agent and timeout from the config
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, String)],
        params: &[(&str, String)],
    ) -> Result<HttpResponse, AppError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, value);
        }
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }

    async fn post_form(
        &self,
        url: &str,
        form: &[(&str, String)],
    ) -> Result<HttpResponse, AppError> {
        debug!("POST {}", url);

        let response = self.client.post(url).form(form).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
