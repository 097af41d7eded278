//! Issue records reported back to callers.

use serde::Serialize;

use crate::row::Row;

/// A single rule violation on a (possibly dot-joined) field path.
///
/// The field is empty for issues that concern the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One line per distinct message, with every affected field folded into
/// `field` (for example `"month and year, site"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedIssue {
    pub field: String,
    pub message: String,
}

/// A combined issue attributed to a 1-based row of a CSV batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    pub row: usize,
    pub field: String,
    pub message: String,
}

/// Summary of everything wrong with one uploaded user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserError {
    /// 1-based position of the user in the uploaded batch.
    pub row: usize,
    pub user: Row,
    pub error: String,
}
