//! Issue combination.
//!
//! Rules raise one issue per offending field, so a single problem (say, a
//! child without a birth date) can surface several times. Combining groups
//! issues by their exact message so the user sees one line per problem, with
//! the affected fields listed together.

use std::collections::HashMap;

use roster_model::{CombinedIssue, FieldIssue};

use crate::issue::fields;

const MONTH_AND_YEAR: &str = "month and year";

/// Fields sharing one message, in order of first appearance.
#[derive(Debug, Default)]
struct MessageGroups<'a> {
    index: HashMap<&'a str, usize>,
    groups: Vec<(&'a str, Vec<String>)>,
}

impl<'a> MessageGroups<'a> {
    fn add(&mut self, field: &str, message: &'a str) {
        if message.trim().is_empty() {
            return;
        }
        let slot = *self.index.entry(message).or_insert_with(|| {
            self.groups.push((message, Vec::new()));
            self.groups.len() - 1
        });
        if !field.is_empty() {
            self.groups[slot].1.push(field.to_string());
        }
    }

    fn into_groups(self) -> Vec<(&'a str, Vec<String>)> {
        self.groups
    }
}

/// Render a field list for display.
///
/// Duplicates are dropped, `month` and `year` are collapsed into
/// `"month and year"` when both appear, and the month/year label always comes
/// first.
pub fn format_issue_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut unique: Vec<&str> = Vec::with_capacity(fields.len());
    for field in fields {
        let field = field.as_ref();
        if !unique.contains(&field) {
            unique.push(field);
        }
    }

    let has_month = unique.contains(&fields::MONTH);
    let has_year = unique.contains(&fields::YEAR);
    let mut rendered: Vec<&str> = unique
        .into_iter()
        .filter(|field| *field != fields::MONTH && *field != fields::YEAR)
        .collect();

    match (has_month, has_year) {
        (true, true) => rendered.insert(0, MONTH_AND_YEAR),
        (true, false) => rendered.insert(0, fields::MONTH),
        (false, true) => rendered.insert(0, fields::YEAR),
        (false, false) => {}
    }

    rendered.join(", ")
}

/// Combine raw issues into one entry per distinct message.
///
/// Blank messages are dropped. Output follows the order in which each message
/// first appeared.
pub fn combine_issues(issues: &[FieldIssue]) -> Vec<CombinedIssue> {
    let mut groups = MessageGroups::default();
    for issue in issues {
        groups.add(&issue.field, &issue.message);
    }
    groups
        .into_groups()
        .into_iter()
        .map(|(message, fields)| CombinedIssue {
            field: format_issue_fields(&fields),
            message: message.to_string(),
        })
        .collect()
}

/// Display label for a field name.
pub fn normalize_field_label(field: &str) -> &str {
    if field == fields::USERTYPE {
        "userType"
    } else {
        field
    }
}

/// Combine already-labeled errors into display lines of the form
/// `"<fields>: <message>"` (or the bare message when no field applies).
pub fn combine_field_errors(errors: &[CombinedIssue]) -> Vec<String> {
    let mut groups = MessageGroups::default();
    for error in errors {
        groups.add(normalize_field_label(&error.field), &error.message);
    }
    groups
        .into_groups()
        .into_iter()
        .map(|(message, fields)| {
            let field = format_issue_fields(&fields);
            if field.is_empty() {
                message.to_string()
            } else {
                format!("{field}: {message}")
            }
        })
        .collect()
}
