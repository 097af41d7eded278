//! JSON roster and submission loading.

use std::path::Path;

use roster_model::Row;
use serde_json::Value;

use crate::error::{IngestError, Result};

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a parsed JSON array of objects into rows.
///
/// Nested arrays or objects inside a row are rejected as a parse error.
pub fn rows_from_json(value: Value, path: &Path) -> Result<Vec<Row>> {
    let Value::Array(items) = value else {
        return Err(IngestError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(IngestError::NotAnObject {
                    path: path.to_path_buf(),
                    index,
                });
            }
            serde_json::from_value(item).map_err(|source| IngestError::JsonParse {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

/// Read a JSON file holding an array of row objects.
pub fn read_rows_json(path: &Path) -> Result<Vec<Row>> {
    let rows = rows_from_json(read_json(path)?, path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Read roster JSON");
    Ok(rows)
}

/// Read a single submission. Its shape is left to the validator.
pub fn read_submission_json(path: &Path) -> Result<Value> {
    read_json(path)
}
