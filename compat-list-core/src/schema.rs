//! Validation of raw dataset bytes into typed entries.
//!
//! The document is parsed in two passes: first as untyped JSON so a wrong
//! root shape can be reported as such, then entry by entry so a bad record
//! is reported with its position in the array.

use serde_json::Value;

use crate::{Entry, SchemaError};

/// Parse a dataset document (a JSON array of entries).
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<Entry>, SchemaError> {
    let root: Value = serde_json::from_slice(bytes).map_err(SchemaError::Json)?;
    entries_from_value(root)
}

fn entries_from_value(root: Value) -> Result<Vec<Entry>, SchemaError> {
    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(SchemaError::NotAnArray {
                found: json_kind(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Entry>(item)
                .map_err(|source| SchemaError::invalid_entry(index, source))
        })
        .collect()
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
#[path = "tests/schema_tests.rs"]
mod tests;
