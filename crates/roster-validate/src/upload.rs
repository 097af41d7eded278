//! Bulk roster upload validation.
//!
//! Stages run in a fixed order and only the header check can stop early:
//!
//! 1. An empty batch fails with no errors.
//! 2. `usertype` cells are trimmed.
//! 3. The required headers are computed from the batch and checked against
//!    the first row.
//! 4. Rows that already carry an `id` are provisioned and skip row rules.
//! 5. Remaining rows run the add-users rules; each failing row gets one
//!    combined error line.
//! 6. Rows that passed must name a site, unless the site comes from
//!    permissions.

use std::collections::BTreeMap;

use roster_model::{CellValue, CombinedIssue, Row, UploadValidation, UserError};

use crate::combine::combine_field_errors;
use crate::headers::{compute_required_headers, validate_headers};
use crate::issue::{SITE_REQUIRED, fields};
use crate::options::UploadOptions;
use crate::rules::{AddUsersProfile, validate_rows};
use crate::sites::{detect_multiple_sites, has_site};

/// Separator between the combined error lines of one user.
const ERROR_SEPARATOR: &str = "; ";

/// Trim a text `usertype` cell in place; other values are left alone.
fn trim_user_type(row: &mut Row) {
    if let Some(CellValue::Text(text)) = row.get_ignore_case_mut(fields::USERTYPE) {
        let trimmed = text.trim();
        if trimmed.len() != text.len() {
            *text = trimmed.to_string();
        }
    }
}

/// A row whose `id` cell is filled in describes an existing user.
pub fn is_provisioned(row: &Row) -> bool {
    row.get_ignore_case(fields::ID)
        .is_some_and(|value| !value.is_blank())
}

/// Validate a parsed add-users upload.
///
/// Never fails: every problem is reported in the returned
/// [`UploadValidation`]. `data` echoes the uploaded rows (after the
/// `usertype` trim) unless the header check failed.
pub fn validate_add_users_upload(mut rows: Vec<Row>, options: &UploadOptions) -> UploadValidation {
    if rows.is_empty() {
        tracing::debug!("Upload contains no rows");
        return UploadValidation::default();
    }

    rows.iter_mut().for_each(trim_user_type);

    let required = compute_required_headers(&rows, options.site_policy);
    tracing::debug!(required = ?required, "Computed required headers");

    let headers: Vec<&str> = rows.first().map(|row| row.headers().collect()).unwrap_or_default();
    let header_check = validate_headers(&headers, &required);
    if !header_check.success {
        tracing::warn!(
            missing = header_check.errors.len(),
            "Upload is missing required headers"
        );
        return UploadValidation {
            header_errors: Some(header_check.errors),
            ..UploadValidation::default()
        };
    }

    // Batch positions of rows that still need validation.
    let pending: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !is_provisioned(row))
        .map(|(position, _)| position)
        .collect();
    tracing::debug!(
        pending = pending.len(),
        provisioned = rows.len() - pending.len(),
        "Partitioned upload rows"
    );

    let profile = AddUsersProfile::new(options.validation);
    let validation = validate_rows(&profile, pending.iter().map(|&position| &rows[position]));

    let mut issues_by_row: BTreeMap<usize, Vec<CombinedIssue>> = BTreeMap::new();
    for issue in validation.errors {
        issues_by_row
            .entry(issue.row - 1)
            .or_default()
            .push(CombinedIssue {
                field: issue.field,
                message: issue.message,
            });
    }

    let mut errors: Vec<UserError> = issues_by_row
        .iter()
        .map(|(&index, issues)| {
            let position = pending[index];
            UserError {
                row: position + 1,
                user: rows[position].clone(),
                error: combine_field_errors(issues).join(ERROR_SEPARATOR),
            }
        })
        .collect();

    if options.site_policy.requires_site_column() {
        let missing_site = pending
            .iter()
            .enumerate()
            .filter(|(index, _)| !issues_by_row.contains_key(index))
            .map(|(_, &position)| position)
            .filter(|&position| !has_site(&rows[position]));
        errors.extend(missing_site.map(|position| UserError {
            row: position + 1,
            user: rows[position].clone(),
            error: SITE_REQUIRED.to_string(),
        }));
    }

    let site_info = detect_multiple_sites(&rows);
    if site_info.has_multiple_sites {
        tracing::warn!(
            sites = site_info.unique_sites.len(),
            "Upload references multiple sites"
        );
    }

    tracing::info!(
        rows = rows.len(),
        validated = pending.len(),
        errors = errors.len(),
        "Validated roster upload"
    );

    UploadValidation {
        success: errors.is_empty(),
        errors,
        data: rows,
        has_multiple_sites: site_info.has_multiple_sites,
        unique_sites: site_info.unique_sites,
        header_errors: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_text_user_types() {
        let mut row = Row::from_iter([("UserType", CellValue::from("  child "))]);
        trim_user_type(&mut row);
        assert_eq!(row.get("UserType"), Some(&CellValue::from("child")));

        let mut row = Row::from_iter([("usertype", CellValue::from(3_i64))]);
        trim_user_type(&mut row);
        assert_eq!(row.get("usertype"), Some(&CellValue::Integer(3)));
    }

    #[test]
    fn provisioned_rows_have_an_id() {
        assert!(is_provisioned(&Row::from_iter([("ID", "abc")])));
        assert!(!is_provisioned(&Row::from_iter([("id", "")])));
        assert!(!is_provisioned(&Row::from_iter([("usertype", "child")])));
    }
}
