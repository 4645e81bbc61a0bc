//! Column-oriented JSON tables.
//!
//! The statistics API serialises each dataframe column-first:
//!
//! ```json
//! {"name": {"0": "A", "1": "B"}, "score": {"0": 50, "1": 12}}
//! ```
//!
//! `parse_column_table` normalises that shape (and the array-per-column and
//! array-of-records variants) into a `ColumnTable` with positional rows.

use crate::utils::error::ParseError;
use log::debug;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

static NULL: Value = Value::Null;

/// A decoded table: named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    columns: BTreeMap<String, Vec<Value>>,
    row_count: usize,
}

impl ColumnTable {
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Cell value; `null` when the column or row does not exist
    pub fn cell(&self, column: &str, row: usize) -> &Value {
        self.columns
            .get(column)
            .and_then(|values| values.get(row))
            .unwrap_or(&NULL)
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        (0..self.row_count).map(move |index| RowView { table: self, index })
    }
}

/// Borrowed view of one row with typed accessors
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a ColumnTable,
    index: usize,
}

impl<'a> RowView<'a> {
    pub fn get(&self, column: &str) -> &'a Value {
        self.table.cell(column, self.index)
    }

    /// Non-negative integer cell; `null` counts as zero
    pub fn count(&self, column: &str) -> Result<u32, ParseError> {
        Ok(self.optional_count(column)?.unwrap_or(0))
    }

    /// Non-negative integer cell; `None` for `null` or a blank string
    pub fn optional_count(&self, column: &str) -> Result<Option<u32>, ParseError> {
        let value = self.get(column);
        if is_missing(value) {
            return Ok(None);
        }
        to_count(value)
            .map(Some)
            .ok_or_else(|| self.invalid(column, value))
    }

    /// Flag cell (0/1 or boolean); `None` when not recorded
    pub fn optional_flag(&self, column: &str) -> Result<Option<bool>, ParseError> {
        Ok(self.optional_count(column)?.map(|n| n > 0))
    }

    /// Player name; `None` for a null or blank cell
    pub fn name(&self, column: &str) -> Result<Option<String>, ParseError> {
        let value = self.get(column);
        match value {
            Value::Null => Ok(None),
            Value::String(s) => {
                let trimmed = s.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Err(self.invalid(column, value)),
        }
    }

    fn invalid(&self, column: &str, value: &Value) -> ParseError {
        ParseError::InvalidValue {
            column: column.to_string(),
            row: self.index,
            value: value.to_string(),
        }
    }
}

fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn to_count(value: &Value) -> Option<u32> {
    match value {
        Value::Bool(b) => Some(u32::from(*b)),
        Value::Number(n) => match n.as_u64() {
            Some(u) => u32::try_from(u).ok(),
            None => n.as_f64().and_then(integral_f64),
        },
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(integral_f64),
        _ => None,
    }
}

fn integral_f64(f: f64) -> Option<u32> {
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        Some(f as u32)
    } else {
        None
    }
}

/// Parse a JSON string into a `ColumnTable`
pub fn parse_column_table_str(json: &str) -> Result<ColumnTable, ParseError> {
    let raw: Value = serde_json::from_str(json)?;
    parse_column_table(&raw)
}

/// Normalise a raw JSON table into a `ColumnTable`
///
/// # Errors
/// * `ParseError::InvalidFormat` - Not an object of columns or array of records,
///   mixed column shapes, or array columns of unequal length
pub fn parse_column_table(raw: &Value) -> Result<ColumnTable, ParseError> {
    let table = match raw {
        Value::Object(columns) => from_columns(columns)?,
        Value::Array(records) => from_records(records)?,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "expected an object of columns or an array of records, got {}",
                json_kind(other)
            )))
        }
    };

    debug!(
        "Decoded table: {} rows, columns {:?}",
        table.row_count,
        table.column_names().collect::<Vec<_>>()
    );

    Ok(table)
}

fn from_columns(columns: &Map<String, Value>) -> Result<ColumnTable, ParseError> {
    if columns.values().all(Value::is_object) {
        Ok(from_index_maps(columns))
    } else if columns.values().all(Value::is_array) {
        from_arrays(columns)
    } else {
        let bad = columns
            .iter()
            .find(|(_, v)| !v.is_object() && !v.is_array())
            .map(|(k, _)| k.as_str())
            .unwrap_or("?");
        Err(ParseError::InvalidFormat(format!(
            "column '{}' is not an index map or array (or column shapes are mixed)",
            bad
        )))
    }
}

/// `{"col": {"0": v, "1": v}}` - rows are the union of index keys
fn from_index_maps(columns: &Map<String, Value>) -> ColumnTable {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order: Vec<&str> = Vec::new();

    for column in columns.values().filter_map(Value::as_object) {
        for key in column.keys() {
            if seen.insert(key.as_str()) {
                order.push(key.as_str());
            }
        }
    }

    // Integer row labels sort numerically so "10" follows "9"
    let numeric: Option<Vec<(i64, &str)>> = order
        .iter()
        .map(|key| key.parse::<i64>().ok().map(|n| (n, *key)))
        .collect();
    if let Some(mut numeric) = numeric {
        numeric.sort_by_key(|(n, _)| *n);
        order = numeric.into_iter().map(|(_, key)| key).collect();
    }

    let columns = columns
        .iter()
        .filter_map(|(name, column)| column.as_object().map(|map| (name, map)))
        .map(|(name, map)| {
            let values = order
                .iter()
                .map(|key| map.get(*key).cloned().unwrap_or(Value::Null))
                .collect();
            (name.clone(), values)
        })
        .collect();

    ColumnTable {
        columns,
        row_count: order.len(),
    }
}

/// `{"col": [v, v]}` - all arrays must be the same length
fn from_arrays(columns: &Map<String, Value>) -> Result<ColumnTable, ParseError> {
    let mut row_count: Option<usize> = None;
    let mut out = BTreeMap::new();

    for (name, column) in columns {
        let values = column.as_array().cloned().unwrap_or_default();
        match row_count {
            Some(expected) if expected != values.len() => {
                return Err(ParseError::InvalidFormat(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    values.len(),
                    expected
                )));
            }
            _ => row_count = Some(values.len()),
        }
        out.insert(name.clone(), values);
    }

    Ok(ColumnTable {
        columns: out,
        row_count: row_count.unwrap_or(0),
    })
}

/// `[{"col": v}, ...]`
fn from_records(records: &[Value]) -> Result<ColumnTable, ParseError> {
    let mut objects = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        match record {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(ParseError::InvalidFormat(format!(
                    "record {} is {}, expected an object",
                    row,
                    json_kind(other)
                )))
            }
        }
    }

    let mut columns: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for name in objects.iter().flat_map(|map| map.keys()) {
        if !columns.contains_key(name) {
            let values = objects
                .iter()
                .map(|map| map.get(name).cloned().unwrap_or(Value::Null))
                .collect();
            columns.insert(name.clone(), values);
        }
    }

    Ok(ColumnTable {
        columns,
        row_count: objects.len(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_maps_sort_numerically() {
        let raw = json!({
            "name": {"0": "A", "2": "C", "10": "K", "1": "B"},
            "score": {"0": 1, "1": 2, "2": 3, "10": 11}
        });
        let table = parse_column_table(&raw).unwrap();

        assert_eq!(table.row_count(), 4);
        let names: Vec<_> = table
            .rows()
            .map(|r| r.name("name").unwrap().unwrap())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "K"]);
        assert_eq!(table.cell("score", 3), &json!(11));
    }

    #[test]
    fn test_index_maps_fill_missing_cells_with_null() {
        let raw = json!({
            "name": {"0": "A", "1": "B"},
            "score": {"0": 5}
        });
        let table = parse_column_table(&raw).unwrap();
        assert_eq!(table.cell("score", 1), &Value::Null);
        assert_eq!(table.rows().nth(1).unwrap().count("score").unwrap(), 0);
    }

    #[test]
    fn test_array_columns() {
        let raw = json!({"name": ["A", "B"], "catches": [1, 0]});
        let table = parse_column_table(&raw).unwrap();
        assert_eq!(table.row_count(), 2);
        assert!(table.has_column("catches"));
    }

    #[test]
    fn test_array_columns_length_mismatch() {
        let raw = json!({"name": ["A", "B"], "catches": [1]});
        assert!(matches!(
            parse_column_table(&raw),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_records() {
        let raw = json!([{"name": "A", "runs": 10}, {"name": "B"}]);
        let table = parse_column_table(&raw).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell("runs", 1), &Value::Null);
    }

    #[test]
    fn test_rejects_scalar_and_mixed_shapes() {
        assert!(parse_column_table(&json!(42)).is_err());
        assert!(parse_column_table(&json!({"name": ["A"], "score": {"0": 1}})).is_err());
        assert!(parse_column_table(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_empty_object_is_empty_table() {
        let table = parse_column_table(&json!({})).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_names().count(), 0);
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(to_count(&json!(3)), Some(3));
        assert_eq!(to_count(&json!(3.0)), Some(3));
        assert_eq!(to_count(&json!(true)), Some(1));
        assert_eq!(to_count(&json!(" 7 ")), Some(7));
        assert_eq!(to_count(&Value::Null), Some(0));
        assert_eq!(to_count(&json!(-1)), None);
        assert_eq!(to_count(&json!(2.5)), None);
        assert_eq!(to_count(&json!("x")), None);
        assert_eq!(to_count(&json!([1])), None);
    }

    #[test]
    fn test_name_accessor() {
        let raw = json!({"name": [" Smith ", "", null, 7, true]});
        let table = parse_column_table(&raw).unwrap();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].name("name").unwrap().as_deref(), Some("Smith"));
        assert_eq!(rows[1].name("name").unwrap(), None);
        assert_eq!(rows[2].name("name").unwrap(), None);
        assert_eq!(rows[3].name("name").unwrap().as_deref(), Some("7"));
        assert!(rows[4].name("name").is_err());
    }
}
