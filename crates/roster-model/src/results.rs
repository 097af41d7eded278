//! Validation result envelopes.

use serde::Serialize;

use crate::issue::{CombinedIssue, FieldIssue, RowIssue, UserError};
use crate::records::AddUserSubmission;
use crate::row::Row;

/// Outcome of validating a batch of rows against one rule profile.
#[derive(Debug, Clone, Serialize)]
pub struct CsvValidation<T> {
    pub success: bool,
    pub errors: Vec<RowIssue>,
    /// Records for the rows that passed; failing rows are left out.
    pub data: Vec<T>,
}

impl<T> CsvValidation<T> {
    pub fn from_parts(data: Vec<T>, errors: Vec<RowIssue>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
            data,
        }
    }
}

/// Outcome of validating one programmatic submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionValidation {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AddUserSubmission>,
    pub errors: Vec<CombinedIssue>,
}

/// Outcome of a required-header check.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderValidation {
    pub success: bool,
    pub errors: Vec<FieldIssue>,
    /// The observed headers, trimmed and lower-cased.
    pub data: Vec<String>,
}

/// Distinct sites referenced across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub has_multiple_sites: bool,
    /// Sites in order of first appearance.
    pub unique_sites: Vec<String>,
}

/// Consolidated verdict for a bulk roster upload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadValidation {
    pub success: bool,
    pub errors: Vec<UserError>,
    pub data: Vec<Row>,
    pub has_multiple_sites: bool,
    pub unique_sites: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_errors: Option<Vec<FieldIssue>>,
}

impl UploadValidation {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_header_errors(&self) -> bool {
        self.header_errors
            .as_ref()
            .is_some_and(|errors| !errors.is_empty())
    }
}
