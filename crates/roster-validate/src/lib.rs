//! Validation pipeline for roster uploads and user submissions.
//!
//! Rows come in already parsed (see `roster-ingest`). The pipeline
//! normalizes them, applies a rule profile, combines the resulting issues
//! into one readable line per problem and, for bulk uploads, adds the header
//! and site checks. Nothing here returns an error: every problem found is part
//! of the returned result.
//!
//! ```
//! use roster_model::Row;
//! use roster_validate::{UploadOptions, validate_add_users_upload};
//!
//! let rows = vec![Row::from_iter([
//!     ("UserType", "teacher"),
//!     ("School", "s1"),
//!     ("Site", "North"),
//! ])];
//! let result = validate_add_users_upload(rows, &UploadOptions::default());
//! assert!(result.success);
//! ```

pub mod combine;
pub mod headers;
pub mod issue;
pub mod normalize;
pub mod options;
pub mod rules;
pub mod sites;
pub mod upload;

use roster_model::{AddUserRecord, CsvValidation, LinkUserRecord, Row, SubmissionValidation};
use serde_json::Value;

pub use combine::{combine_field_errors, combine_issues, format_issue_fields};
pub use headers::{compute_required_headers, validate_headers};
pub use issue::Issue;
pub use normalize::{normalize_headers, normalize_row, parse_comma_separated};
pub use options::{SitePolicy, UploadOptions, ValidationOptions};
pub use rules::birth::child_age_error_fields;
pub use rules::{AddUsersProfile, LinkUsersProfile, RowProfile, validate_rows};
pub use sites::{detect_multiple_sites, has_site};
pub use upload::{is_provisioned, validate_add_users_upload};

/// Validate add-users rows without the upload-level header and site checks.
pub fn validate_add_users_csv(rows: &[Row], options: &ValidationOptions) -> CsvValidation<AddUserRecord> {
    validate_rows(&AddUsersProfile::new(*options), rows)
}

/// Validate link-users rows.
pub fn validate_link_users_csv(rows: &[Row]) -> CsvValidation<LinkUserRecord> {
    validate_rows(&LinkUsersProfile, rows)
}

/// Validate one programmatic add-user submission.
pub fn validate_add_users_submit(value: &Value, options: &ValidationOptions) -> SubmissionValidation {
    rules::validate_submission(value, options)
}
