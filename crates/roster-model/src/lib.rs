//! Data model for roster uploads.
//!
//! Rows arrive already parsed (from CSV or a programmatic submission) and are
//! described here as ordered column/value pairs. Validation results, issues
//! and the typed records produced by a successful validation also live here so
//! that the validator, the file readers and the CLI share one vocabulary.

pub mod cell;
pub mod error;
pub mod issue;
pub mod lookup;
pub mod org;
pub mod records;
pub mod results;
pub mod row;
pub mod user_type;

pub use cell::CellValue;
pub use error::{ModelError, Result};
pub use issue::{CombinedIssue, FieldIssue, RowIssue, UserError};
pub use lookup::CaseInsensitiveSet;
pub use org::OrgIds;
pub use records::{AddUserRecord, AddUserSubmission, LinkUserRecord};
pub use results::{
    CsvValidation, HeaderValidation, SiteInfo, SubmissionValidation, UploadValidation,
};
pub use row::Row;
pub use user_type::{CAREGIVER_ALIAS, UserType, canonical_user_type};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_result_counts_errors() {
        let user = Row::from_iter([("usertype", "child")]);
        let result = UploadValidation {
            success: false,
            errors: vec![UserError {
                row: 1,
                user: user.clone(),
                error: "Site: Site is required".to_string(),
            }],
            data: vec![user],
            has_multiple_sites: false,
            unique_sites: vec![],
            header_errors: None,
        };
        assert_eq!(result.error_count(), 1);
        assert!(!result.has_header_errors());
    }

    #[test]
    fn csv_validation_success_tracks_errors() {
        let ok: CsvValidation<u8> = CsvValidation::from_parts(vec![1, 2], vec![]);
        assert!(ok.success);

        let failed: CsvValidation<u8> = CsvValidation::from_parts(
            vec![],
            vec![RowIssue {
                row: 1,
                field: "usertype".to_string(),
                message: "userType is required".to_string(),
            }],
        );
        assert!(!failed.success);
    }
}
