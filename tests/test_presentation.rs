use serde_json::{Map, Value, json};
use td_client::presentation::{
    accounts_frame, history_frame, instrument_frame, options_frame, quote_frame, search_frame,
    watchlists_frame,
};
use td_client::presentation::frame::Cell;

fn contract(symbol: &str, put_call: &str, epoch_ms: i64) -> Value {
    json!({
        "putCall": put_call,
        "symbol": symbol,
        "bid": 1.25,
        "ask": 1.35,
        "tradeTimeInLong": epoch_ms,
        "quoteTimeInLong": epoch_ms,
        "expirationDate": epoch_ms,
        "lastTradingDay": epoch_ms,
    })
}

fn sample_chain() -> Value {
    json!({
        "symbol": "AAPL",
        "callExpDateMap": {
            "2023-11-17:3": {"190.0": [contract("AAPL_111723C190", "CALL", 1700000000000_i64)]},
            "2023-11-24:10": {"195.0": [contract("AAPL_112423C195", "CALL", 1700000000000_i64)]}
        },
        "putExpDateMap": {
            "2023-11-17:3": {"190.0": [contract("AAPL_111723P190", "PUT", 1700000000000_i64)]},
            "2023-11-24:10": {"195.0": [contract("AAPL_112423P195", "PUT", 1700000000000_i64)]}
        }
    })
}

#[test]
fn options_frame_walks_calls_before_puts() {
    let frame = options_frame(&sample_chain()).unwrap();

    assert_eq!(frame.len(), 4);
    let sides: Vec<&str> = (0..4)
        .map(|i| frame.get(i, "putCall").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(sides, vec!["CALL", "CALL", "PUT", "PUT"]);

    let dt = frame.get(0, "expirationDate").unwrap().as_datetime().unwrap();
    assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
}

#[test]
fn options_frame_missing_timestamp_column_is_schema_error() {
    let mut chain = sample_chain();
    chain["callExpDateMap"]["2023-11-17:3"]["190.0"][0]
        .as_object_mut()
        .unwrap()
        .remove("tradeTimeInLong");

    let err = options_frame(&chain).unwrap_err();
    assert!(err.to_string().contains("tradeTimeInLong"));
}

#[test]
fn options_frame_missing_put_map_is_schema_error() {
    let mut chain = sample_chain();
    chain.as_object_mut().unwrap().remove("putExpDateMap");

    let err = options_frame(&chain).unwrap_err();
    assert!(err.to_string().contains("putExpDateMap"));
}

#[test]
fn history_frame_converts_datetime_from_epoch() {
    let history = json!({
        "symbol": "AAPL",
        "empty": false,
        "candles": [{"datetime": 0, "close": 100}]
    });

    let frame = history_frame(&history).unwrap();
    assert_eq!(frame.len(), 1);
    let dt = frame.get(0, "datetime").unwrap().as_datetime().unwrap();
    assert_eq!(dt.timestamp(), 0);
    assert_eq!(frame.get(0, "close"), Some(&Cell::Int(100)));
}

#[test]
fn history_frame_without_candles_is_schema_error() {
    let err = history_frame(&json!({"symbol": "AAPL"})).unwrap_err();
    assert!(err.to_string().contains("candles"));
}

#[test]
fn quote_frame_one_row_per_symbol_in_map_order() {
    let quotes = json!({
        "AAPL": {"symbol": "AAPL", "lastPrice": 190.2},
        "MSFT": {"symbol": "MSFT", "lastPrice": 370.1}
    });

    let frame = quote_frame(&quotes).unwrap();
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.get(0, "symbol").unwrap().as_str(), Some("AAPL"));
    assert_eq!(frame.get(1, "symbol").unwrap().as_str(), Some("MSFT"));
}

#[test]
fn quote_frame_rejects_non_object() {
    assert!(quote_frame(&json!([1, 2, 3])).is_err());
}

#[test]
fn search_frame_discards_symbol_keys() {
    let results = json!({
        "AAPL": {"cusip": "037833100", "symbol": "AAPL"},
        "AAPT": {"cusip": "999999999", "symbol": "AAPT"}
    });

    let frame = search_frame(&results).unwrap();
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.columns(), &["cusip", "symbol"]);
}

#[test]
fn instrument_frame_handles_object_and_array() {
    let single = json!({"cusip": "037833100", "symbol": "AAPL"});
    assert_eq!(instrument_frame(&single).unwrap().len(), 1);

    let many = json!([
        {"cusip": "037833100", "symbol": "AAPL"},
        {"cusip": "999999999", "symbol": "AAPT"}
    ]);
    assert_eq!(instrument_frame(&many).unwrap().len(), 2);

    assert!(instrument_frame(&json!("AAPL")).is_err());
}

#[test]
fn accounts_frame_one_flattened_row_per_account() {
    let mut accounts = Map::new();
    accounts.insert(
        "111".to_string(),
        json!({"securitiesAccount": {"accountId": "111", "type": "CASH"}}),
    );
    accounts.insert(
        "222".to_string(),
        json!({"securitiesAccount": {"accountId": "222", "type": "MARGIN"}}),
    );

    let frame = accounts_frame(&accounts);
    assert_eq!(frame.len(), 2);
    assert_eq!(
        frame.get(0, "securitiesAccount.accountId").unwrap().as_str(),
        Some("111")
    );
    assert_eq!(
        frame.get(1, "securitiesAccount.type").unwrap().as_str(),
        Some("MARGIN")
    );
}

#[test]
fn watchlists_frame_array_and_object_shapes() {
    let collection = json!([
        {"name": "tech", "watchlistId": "1"},
        {"name": "energy", "watchlistId": "2"}
    ]);
    assert_eq!(watchlists_frame(&collection).unwrap().len(), 2);

    let single = json!({"name": "tech", "watchlistId": "1"});
    let frame = watchlists_frame(&single).unwrap();
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.get(0, "name").unwrap().as_str(), Some("tech"));

    assert!(watchlists_frame(&json!("tech")).is_err());
}

#[test]
fn projection_never_alters_non_timestamp_values() {
    // Raw record with no epoch fields: the tabular view must agree with the
    // raw JSON on every value.
    let raw = json!({
        "AAPL": {
            "symbol": "AAPL",
            "bidPrice": 189.95,
            "askSize": 300,
            "delayed": true,
            "exchangeName": "NASD"
        }
    });

    let frame = quote_frame(&raw).unwrap();
    let record = raw["AAPL"].as_object().unwrap();
    for (key, value) in record {
        let cell = frame.get(0, key).unwrap();
        match value {
            Value::String(s) => assert_eq!(cell.as_str(), Some(s.as_str())),
            Value::Bool(b) => assert_eq!(cell, &Cell::Bool(*b)),
            Value::Number(n) if n.is_i64() => {
                assert_eq!(cell.as_i64(), n.as_i64());
            }
            Value::Number(n) => assert_eq!(cell.as_f64(), n.as_f64()),
            _ => panic!("unexpected value type"),
        }
    }
}
