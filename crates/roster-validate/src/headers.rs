//! Required header checks.

use roster_model::{CaseInsensitiveSet, CellValue, FieldIssue, HeaderValidation, Row};

use crate::issue::fields;
use crate::normalize::normalize_headers;
use crate::options::SitePolicy;

/// Check that every required header is present.
///
/// Both lists are compared after trimming and lower-casing; order and extra
/// headers do not matter. One issue is reported per missing header, in the
/// order the headers were required.
pub fn validate_headers<H, R>(headers: &[H], required: &[R]) -> HeaderValidation
where
    H: AsRef<str>,
    R: AsRef<str>,
{
    let normalized = normalize_headers(headers);
    let present = CaseInsensitiveSet::new(normalized.iter().map(String::as_str));

    let errors: Vec<FieldIssue> = normalize_headers(required)
        .into_iter()
        .filter(|header| !present.contains(header))
        .map(|header| {
            let message = format!("Missing required header: {header}");
            FieldIssue::new(header, message)
        })
        .collect();

    HeaderValidation {
        success: errors.is_empty(),
        errors,
        data: normalized,
    }
}

fn is_child_row(row: &Row) -> bool {
    row.get_ignore_case(fields::USERTYPE)
        .and_then(CellValue::as_str)
        .is_some_and(|value| value.trim().eq_ignore_ascii_case("child"))
}

/// Headers an add-users upload must carry, given its rows.
///
/// `usertype` is always required. `month` and `year` are required when any
/// row is a child. `cohort` and `school` are both required when the first
/// row has neither column. `site` is required unless the site comes from the
/// uploader's permissions.
pub fn compute_required_headers(rows: &[Row], site_policy: SitePolicy) -> Vec<String> {
    let mut required = vec![fields::USERTYPE];

    if rows.iter().any(is_child_row) {
        required.extend([fields::MONTH, fields::YEAR]);
    }

    let observed = CaseInsensitiveSet::new(rows.first().into_iter().flat_map(Row::headers));
    if !observed.contains(fields::COHORT) && !observed.contains(fields::SCHOOL) {
        required.extend([fields::COHORT, fields::SCHOOL]);
    }

    if site_policy.requires_site_column() {
        required.push(fields::SITE);
    }

    required.into_iter().map(str::to_string).collect()
}
