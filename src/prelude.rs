/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! # TD Client Prelude
//!
//! Convenient single import for the most commonly used types and traits.
//!
//! ## Usage
//!
//! ```rust
//! use td_client::prelude::*;
//!
//! let config = Config::with_credentials(None, "refresh".into(), "client-id".into());
//! let client = TdClient::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TD Ameritrade API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// High-level resource client
pub use crate::client::TdClient;

/// Authenticated request wrapper
pub use crate::transport::client::AuthenticatedClient;

/// HTTP transport seam
pub use crate::transport::http_client::{HttpResponse, HttpTransport, ReqwestTransport};

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Access-token cache with refresh
pub use crate::session::token::TokenStore;

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Tabular core types
pub use crate::presentation::frame::{Cell, Frame, flatten};

/// Per-resource projections
pub use crate::presentation::{
    accounts_frame, history_frame, instrument_frame, options_frame, quote_frame, search_frame,
    watchlists_frame,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Environment parsing helpers
pub use crate::utils::config::get_env_or_default;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest status codes for response inspection
pub use reqwest::StatusCode;
