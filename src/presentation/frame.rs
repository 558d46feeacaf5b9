/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Flat tabular frames built from nested JSON records

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;

/// A single typed scalar in a [`Frame`]
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing or JSON null
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Str(String),
    /// UTC datetime, produced by epoch-millisecond conversion
    DateTime(DateTime<Utc>),
}

impl Cell {
    /// Builds a cell from a JSON value
    ///
    /// Arrays and objects that survive flattening (e.g. lists of deliverables
    /// inside an option contract) are kept as their compact JSON text.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Cell::Int(i),
                None => Cell::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Cell::Str(s.clone()),
            other => Cell::Str(other.to_string()),
        }
    }

    /// Returns true for [`Cell::Null`]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Integer accessor
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float accessor; integers widen
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(f) => Some(*f),
            Cell::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// String accessor
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Datetime accessor
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Cell::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "-"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Str(s) => write!(f, "{s}"),
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.3f")),
        }
    }
}

/// Flattens a JSON value into a single-level map with dotted column names
///
/// Nested objects contribute `parent.child` keys; every non-object value is
/// kept as-is under its path.
#[must_use]
pub fn flatten(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    flatten_into("", value, &mut out);
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, nested, out);
            }
        }
        other => {
            out.insert(prefix.to_string(), other.clone());
        }
    }
}

/// Flat table of typed cells with named columns
///
/// Columns are the union of the record keys in first-seen order; records
/// missing a column hold [`Cell::Null`] there. Rows are dense and 0-indexed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    /// Creates an empty frame
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from flat records, one row per record
    #[must_use]
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .get(column)
                            .map(Cell::from_value)
                            .unwrap_or(Cell::Null)
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names in order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the frame has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `(row, column)`, if both exist
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Converts an epoch-millisecond column to UTC datetimes in place
    ///
    /// The conversion is exact: `epoch_ms / 1000` seconds since the Unix
    /// epoch, millisecond precision preserved, UTC interpretation only.
    ///
    /// # Errors
    /// [`AppError::Schema`] when the column is absent, a record holds no
    /// value for it, or a value is not an integer.
    pub fn convert_epoch_ms(&mut self, column: &str) -> Result<(), AppError> {
        let idx = self.column_index(column).ok_or_else(|| {
            AppError::Schema(format!("column '{column}' missing from response"))
        })?;

        for row in &mut self.rows {
            let cell = &mut row[idx];
            let ms = match cell {
                Cell::Int(ms) => *ms,
                Cell::Null => {
                    return Err(AppError::Schema(format!(
                        "column '{column}' missing from a record"
                    )));
                }
                other => {
                    return Err(AppError::Schema(format!(
                        "column '{column}' is not an epoch-millisecond integer: {other}"
                    )));
                }
            };
            let dt = DateTime::from_timestamp_millis(ms).ok_or_else(|| {
                AppError::Schema(format!(
                    "column '{column}' holds an out-of-range timestamp: {ms}"
                ))
            })?;
            *cell = Cell::DateTime(dt);
        }

        Ok(())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell as TableCell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(
            self.columns
                .iter()
                .map(|c| TableCell::new(c))
                .collect(),
        ));

        for row in &self.rows {
            table.add_row(Row::new(
                row.iter()
                    .map(|cell| TableCell::new(&cell.to_string()))
                    .collect(),
            ));
        }

        write!(f, "{table}")
    }
}
