//! Row rule profiles.
//!
//! A profile turns one normalized row into a typed record or the complete
//! list of its rule violations. Each profile keeps its rules as an ordered
//! list of independent functions; every rule runs and their issues are
//! concatenated, so a row always reports everything that is wrong with it.

mod add;
pub mod birth;
mod link;
mod submit;

pub use add::AddUsersProfile;
pub use link::LinkUsersProfile;
pub use submit::validate_submission;

use roster_model::{CsvValidation, Row, RowIssue};

use crate::combine::combine_issues;
use crate::issue::{Issue, to_field_issues};
use crate::normalize::normalize_row;

/// A rule set applied to normalized rows.
pub trait RowProfile {
    type Record;

    /// Validate a row whose keys are already lower-cased and whose blank
    /// cells are already dropped.
    fn validate_row(&self, row: &Row) -> Result<Self::Record, Vec<Issue>>;
}

/// Normalize and validate each row, keeping records for rows that pass and
/// one [`RowIssue`] per combined issue (1-based row) for rows that fail.
pub fn validate_rows<'a, P, I>(profile: &P, rows: I) -> CsvValidation<P::Record>
where
    P: RowProfile,
    I: IntoIterator<Item = &'a Row>,
{
    let mut data = Vec::new();
    let mut errors = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        match profile.validate_row(&normalize_row(row)) {
            Ok(record) => data.push(record),
            Err(issues) => {
                let combined = combine_issues(&to_field_issues(&issues));
                errors.extend(combined.into_iter().map(|issue| RowIssue {
                    row: index + 1,
                    field: issue.field,
                    message: issue.message,
                }));
            }
        }
    }

    CsvValidation::from_parts(data, errors)
}
