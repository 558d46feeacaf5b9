/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Tabular projections for account and watchlist responses

use crate::error::AppError;
use crate::presentation::frame::{Frame, flatten};
use serde_json::{Map, Value};

/// Projects the accounts mapping into one flattened row per account
///
/// Rows follow the insertion order of the mapping; nested objects become
/// dotted columns (`securitiesAccount.accountId`, ...). The map key is
/// dropped, the account id stays available through its own column.
#[must_use]
pub fn accounts_frame(accounts: &Map<String, Value>) -> Frame {
    let records = accounts.values().map(flatten).collect();
    Frame::from_records(records)
}

/// Projects a watchlists response into a flattened frame
///
/// The response shape varies: a collection request yields an array (one row
/// per watchlist), a single-watchlist request yields one object (one row).
///
/// # Errors
/// [`AppError::Schema`] when the response is neither an array nor an object.
pub fn watchlists_frame(watchlists: &Value) -> Result<Frame, AppError> {
    let records = match watchlists {
        Value::Array(items) => items.iter().map(flatten).collect(),
        Value::Object(_) => vec![flatten(watchlists)],
        _ => {
            return Err(AppError::Schema(String::from(
                "watchlists response is neither an array nor an object",
            )));
        }
    };
    Ok(Frame::from_records(records))
}
