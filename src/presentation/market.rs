/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Tabular projections for market data responses

use crate::error::AppError;
use crate::presentation::frame::{Frame, flatten};
use serde_json::Value;

/// Epoch-millisecond columns of an option contract record
const OPTION_EPOCH_COLUMNS: [&str; 4] = [
    "tradeTimeInLong",
    "quoteTimeInLong",
    "expirationDate",
    "lastTradingDay",
];

/// Projects a search (or fundamental) response into one row per symbol
///
/// The symbol keys are discarded; the match records become rows in map
/// order, their fields flattened into dotted columns.
///
/// # Errors
/// [`AppError::Schema`] when the response is not a JSON object.
pub fn search_frame(results: &Value) -> Result<Frame, AppError> {
    let map = results.as_object().ok_or_else(|| {
        AppError::Schema(String::from("search response is not a JSON object"))
    })?;
    let records = map.values().map(flatten).collect();
    Ok(Frame::from_records(records))
}

/// Projects an instrument lookup into a frame
///
/// A single record becomes one row; some lookups answer with an array of
/// records, which become one row each.
///
/// # Errors
/// [`AppError::Schema`] when the response is neither an array nor an object.
pub fn instrument_frame(instrument: &Value) -> Result<Frame, AppError> {
    let records = match instrument {
        Value::Array(items) => items.iter().map(flatten).collect(),
        Value::Object(_) => vec![flatten(instrument)],
        _ => {
            return Err(AppError::Schema(String::from(
                "instrument response is neither an array nor an object",
            )));
        }
    };
    Ok(Frame::from_records(records))
}

/// Transposes the symbol→quote mapping into one row per symbol
///
/// Column order follows the first quote record; the row index is dense and
/// 0-based, matching the map iteration order.
///
/// # Errors
/// [`AppError::Schema`] when the response is not a JSON object.
pub fn quote_frame(quotes: &Value) -> Result<Frame, AppError> {
    let map = quotes.as_object().ok_or_else(|| {
        AppError::Schema(String::from("quote response is not a JSON object"))
    })?;
    let records = map.values().map(flatten).collect();
    Ok(Frame::from_records(records))
}

/// Projects a price history response into one row per candle
///
/// The `datetime` column is converted from epoch milliseconds to UTC.
///
/// # Errors
/// [`AppError::Schema`] when `candles` is absent or the `datetime` column is
/// missing or malformed.
pub fn history_frame(history: &Value) -> Result<Frame, AppError> {
    let candles = history
        .get("candles")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::Schema(String::from("response missing 'candles'")))?;

    let records = candles.iter().map(flatten).collect();
    let mut frame = Frame::from_records(records);
    frame.convert_epoch_ms("datetime")?;
    Ok(frame)
}

/// Flattens an option chain into one row per contract
///
/// Walks `callExpDateMap` then `putExpDateMap` (calls before puts), each a
/// mapping from expiration date to strike to a list of contract records, in
/// their original map iteration order. The four epoch-millisecond timestamp
/// columns are converted to UTC datetimes.
///
/// # Errors
/// [`AppError::Schema`] when either map is absent, the nesting is not
/// date→strike→list, or any of `tradeTimeInLong`, `quoteTimeInLong`,
/// `expirationDate`, `lastTradingDay` is missing from a contract record.
pub fn options_frame(chain: &Value) -> Result<Frame, AppError> {
    let mut records = Vec::new();

    for side in ["callExpDateMap", "putExpDateMap"] {
        let dates = chain
            .get(side)
            .and_then(Value::as_object)
            .ok_or_else(|| AppError::Schema(format!("option chain missing '{side}'")))?;

        for (date, strikes) in dates {
            let strikes = strikes.as_object().ok_or_else(|| {
                AppError::Schema(format!("strike map for '{date}' is not an object"))
            })?;
            for (strike, contracts) in strikes {
                let contracts = contracts.as_array().ok_or_else(|| {
                    AppError::Schema(format!(
                        "contract list for '{date}' strike '{strike}' is not an array"
                    ))
                })?;
                for contract in contracts {
                    records.push(flatten(contract));
                }
            }
        }
    }

    let mut frame = Frame::from_records(records);
    for column in OPTION_EPOCH_COLUMNS {
        frame.convert_epoch_ms(column)?;
    }
    Ok(frame)
}
