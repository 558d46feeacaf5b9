/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Error types for the TD Ameritrade client
//!
//! Every fallible operation in the crate returns [`AppError`]. Nothing is
//! retried beyond the single refresh-and-reissue performed on a
//! `401 Unauthorized`; all other failures surface to the caller unchanged.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Token refresh failed or the refresh response held no usable token
    Auth(String),
    /// A resource call returned a non-200 status after the single auth retry.
    /// Carries the raw response body for diagnostics.
    Unexpected {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// A tabular projection encountered a response missing an expected field
    Schema(String),
    /// Caller supplied an invalid argument
    InvalidInput(String),
    /// Transport-level failure (DNS, connection reset, timeout)
    Request(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(msg) => write!(f, "authentication failed: {msg}"),
            AppError::Unexpected { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Schema(msg) => write!(f, "schema error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Request(e) => write!(f, "request error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Request(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Request(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
