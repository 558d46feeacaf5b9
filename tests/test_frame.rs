use chrono::DateTime;
use serde_json::json;
use td_client::presentation::frame::{Cell, Frame, flatten};

#[test]
fn flatten_produces_dotted_columns() {
    let value = json!({
        "securitiesAccount": {
            "accountId": "12345",
            "currentBalances": {"cashBalance": 100.5}
        },
        "type": "CASH"
    });

    let flat = flatten(&value);
    assert_eq!(flat["securitiesAccount.accountId"], json!("12345"));
    assert_eq!(
        flat["securitiesAccount.currentBalances.cashBalance"],
        json!(100.5)
    );
    assert_eq!(flat["type"], json!("CASH"));
}

#[test]
fn flatten_keeps_arrays_as_values() {
    let value = json!({"legs": [1, 2, 3], "name": "spread"});
    let flat = flatten(&value);
    assert_eq!(flat["legs"], json!([1, 2, 3]));
}

#[test]
fn from_records_unions_columns_in_first_seen_order() {
    let records = vec![
        flatten(&json!({"a": 1, "b": 2})),
        flatten(&json!({"b": 3, "c": 4})),
    ];
    let frame = Frame::from_records(records);

    assert_eq!(frame.columns(), &["a", "b", "c"]);
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.get(0, "c"), Some(&Cell::Null));
    assert_eq!(frame.get(1, "a"), Some(&Cell::Null));
    assert_eq!(frame.get(1, "b"), Some(&Cell::Int(3)));
}

#[test]
fn convert_epoch_ms_is_exact_utc() {
    let records = vec![flatten(&json!({"datetime": 1700000000000_i64, "close": 100}))];
    let mut frame = Frame::from_records(records);
    frame.convert_epoch_ms("datetime").unwrap();

    let dt = frame.get(0, "datetime").unwrap().as_datetime().unwrap();
    assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    // Non-timestamp columns are untouched
    assert_eq!(frame.get(0, "close"), Some(&Cell::Int(100)));
}

#[test]
fn convert_epoch_ms_preserves_millisecond_precision() {
    let records = vec![flatten(&json!({"datetime": 1500_i64}))];
    let mut frame = Frame::from_records(records);
    frame.convert_epoch_ms("datetime").unwrap();

    let dt = frame.get(0, "datetime").unwrap().as_datetime().unwrap();
    assert_eq!(dt, DateTime::from_timestamp_millis(1500).unwrap());
    assert_eq!(dt.timestamp_subsec_millis(), 500);
}

#[test]
fn convert_epoch_ms_missing_column_is_schema_error() {
    let records = vec![flatten(&json!({"close": 100}))];
    let mut frame = Frame::from_records(records);
    let err = frame.convert_epoch_ms("datetime").unwrap_err();
    assert!(err.to_string().starts_with("schema error"));
    assert!(err.to_string().contains("datetime"));
}

#[test]
fn convert_epoch_ms_null_cell_is_schema_error() {
    let records = vec![
        flatten(&json!({"datetime": 0_i64})),
        flatten(&json!({"other": 1})),
    ];
    let mut frame = Frame::from_records(records);
    assert!(frame.convert_epoch_ms("datetime").is_err());
}

#[test]
fn convert_epoch_ms_non_integer_is_schema_error() {
    let records = vec![flatten(&json!({"datetime": "yesterday"}))];
    let mut frame = Frame::from_records(records);
    assert!(frame.convert_epoch_ms("datetime").is_err());
}

#[test]
fn cell_accessors_and_display() {
    assert_eq!(Cell::from_value(&json!(7)), Cell::Int(7));
    assert_eq!(Cell::from_value(&json!(1.5)), Cell::Float(1.5));
    assert_eq!(Cell::from_value(&json!("x")), Cell::Str("x".to_string()));
    assert_eq!(Cell::from_value(&json!(null)), Cell::Null);
    assert!(Cell::from_value(&json!(null)).is_null());

    assert_eq!(Cell::Int(7).as_f64(), Some(7.0));
    assert_eq!(Cell::Null.to_string(), "-");
    assert_eq!(Cell::Str("abc".to_string()).as_str(), Some("abc"));
}

#[test]
fn frame_display_renders_headers_and_cells() {
    let records = vec![flatten(&json!({"symbol": "AAPL", "last": 190.2}))];
    let frame = Frame::from_records(records);
    let rendered = frame.to_string();
    assert!(rendered.contains("symbol"));
    assert!(rendered.contains("AAPL"));
}
