//! Tabular projection of brokerage JSON responses
//!
//! Pure, stateless transforms: each resource shape maps to a flat [`Frame`]
//! of typed cells. Epoch-millisecond timestamp columns are converted to UTC
//! datetimes; a response missing an expected field fails with
//! [`crate::error::AppError::Schema`] rather than emitting a partial row.

/// Account and watchlist projections
pub mod account;
/// Tabular core: cells, frames, flattening
pub mod frame;
/// Market data projections: search, instruments, quotes, history, options
pub mod market;

pub use account::{accounts_frame, watchlists_frame};
pub use frame::{Cell, Frame, flatten};
pub use market::{
    history_frame, instrument_frame, options_frame, quote_frame, search_frame,
};
