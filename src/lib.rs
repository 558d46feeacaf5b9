/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! # TD Client
//!
//! Client library for the TD Ameritrade REST API.
//!
//! The crate is organised around three layers:
//! - **session**: access-token cache with refresh-token based renewal
//! - **transport**: HTTP seam plus an authenticated wrapper that injects the
//!   bearer header and transparently retries once after a token refresh when
//!   the API answers `401 Unauthorized`
//! - **client**: one method per brokerage resource (accounts, instruments,
//!   quotes, price history, option chains, movers, watchlists), each with a
//!   tabular `*_table` variant that reshapes the nested JSON response into a
//!   flat [`presentation::Frame`]
//!
//! # Example
//! ```ignore
//! use td_client::prelude::*;
//!
//! let config = Config::new(); // credentials from the environment
//! let client = TdClient::new(config);
//!
//! let quotes = client.quote("aapl").await?;
//! let chain = client.options_table("AAPL").await?;
//! println!("{chain}");
//! ```

/// High-level client exposing one method per brokerage resource
pub mod client;
/// Configuration and credentials, loaded explicitly or from the environment
pub mod config;
/// Global constants: endpoint paths, default query values
pub mod constants;
/// Error types for the library
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// Tabular projection of the nested JSON responses
pub mod presentation;
/// Token storage and refresh
pub mod session;
/// HTTP transport seam and authenticated request wrapper
pub mod transport;
/// Small helpers: environment parsing, logging setup
pub mod utils;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the current version of the library
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
