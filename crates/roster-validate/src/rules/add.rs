//! Rules for rows of an add-users roster file.

use chrono::NaiveDate;
use roster_model::{AddUserRecord, Row, UserType, canonical_user_type};

use super::RowProfile;
use super::birth;
use crate::issue::{Issue, fields};
use crate::normalize::{cell_text, parse_comma_separated};
use crate::options::ValidationOptions;

/// Columns with rules of their own; everything else passes through.
const KNOWN_COLUMNS: [&str; 10] = [
    fields::ID,
    fields::USERTYPE,
    fields::MONTH,
    fields::YEAR,
    fields::CAREGIVER_ID,
    fields::TEACHER_ID,
    fields::SITE,
    fields::COHORT,
    fields::SCHOOL,
    fields::CLASS,
];

/// The usertype cell after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UserTypeValue {
    Missing,
    Known(UserType),
    Unknown(String),
}

impl UserTypeValue {
    /// Canonicalize a raw cell: trim, lower-case, fold the caregiver alias.
    /// Only roster user types count as known.
    pub(crate) fn from_cell(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Missing;
        };
        if raw.trim().is_empty() {
            return Self::Missing;
        }
        match raw.parse::<UserType>() {
            Ok(user_type) if user_type.is_roster_type() => Self::Known(user_type),
            _ => Self::Unknown(canonical_user_type(raw)),
        }
    }

    pub(crate) fn is_child(&self) -> bool {
        matches!(self, Self::Known(UserType::Child))
    }

    pub(crate) fn issue(&self) -> Option<Issue> {
        let field = fields::USERTYPE.to_string();
        match self {
            Self::Missing => Some(Issue::UserTypeRequired { field }),
            Self::Unknown(_) => Some(Issue::UserTypeInvalid { field }),
            Self::Known(_) => None,
        }
    }
}

/// Known fields of a row before the rules have run.
#[derive(Debug, Clone)]
struct AddUserDraft {
    id: Option<String>,
    user_type: UserTypeValue,
    month: Option<String>,
    year: Option<String>,
    caregiver_id: Option<String>,
    teacher_id: Option<String>,
    site: Option<String>,
    cohort: Option<String>,
    school: Option<String>,
    class: Option<String>,
    extra: Row,
}

impl AddUserDraft {
    fn from_row(row: &Row) -> Self {
        let extra = row
            .iter()
            .filter(|(key, _)| !KNOWN_COLUMNS.contains(key))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();

        Self {
            id: cell_text(row, fields::ID)
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            user_type: UserTypeValue::from_cell(cell_text(row, fields::USERTYPE).as_deref()),
            month: cell_text(row, fields::MONTH),
            year: cell_text(row, fields::YEAR),
            caregiver_id: cell_text(row, fields::CAREGIVER_ID),
            teacher_id: cell_text(row, fields::TEACHER_ID),
            site: cell_text(row, fields::SITE),
            cohort: cell_text(row, fields::COHORT),
            school: cell_text(row, fields::SCHOOL),
            class: cell_text(row, fields::CLASS),
            extra,
        }
    }

    fn into_record(self) -> Option<AddUserRecord> {
        let UserTypeValue::Known(user_type) = self.user_type else {
            return None;
        };
        Some(AddUserRecord {
            id: self.id,
            user_type,
            month: self.month,
            year: self.year,
            caregiver_id: self.caregiver_id,
            teacher_id: self.teacher_id,
            site: self.site,
            cohort: self.cohort,
            school: self.school,
            class: self.class,
            extra: self.extra,
        })
    }
}

type Rule = fn(&AddUserDraft, NaiveDate) -> Vec<Issue>;

/// Rules in reporting order.
const RULES: &[Rule] = &[
    user_type,
    child_birth_date,
    child_age,
    month_range,
    year_format,
    placement,
];

fn user_type(draft: &AddUserDraft, _: NaiveDate) -> Vec<Issue> {
    draft.user_type.issue().into_iter().collect()
}

fn child_birth_date(draft: &AddUserDraft, _: NaiveDate) -> Vec<Issue> {
    birth::birth_date_required(
        draft.user_type.is_child(),
        draft.month.as_deref(),
        draft.year.as_deref(),
    )
}

fn child_age(draft: &AddUserDraft, today: NaiveDate) -> Vec<Issue> {
    birth::child_age(
        draft.user_type.is_child(),
        draft.month.as_deref(),
        draft.year.as_deref(),
        today,
    )
}

fn month_range(draft: &AddUserDraft, _: NaiveDate) -> Vec<Issue> {
    birth::month_range(draft.month.as_deref())
}

fn year_format(draft: &AddUserDraft, _: NaiveDate) -> Vec<Issue> {
    birth::year_format(draft.year.as_deref())
}

/// A row needs a cohort or a school, and a class needs a school.
fn placement(draft: &AddUserDraft, _: NaiveDate) -> Vec<Issue> {
    let cohorts = parse_comma_separated(draft.cohort.as_deref());
    let schools = parse_comma_separated(draft.school.as_deref());
    let classes = parse_comma_separated(draft.class.as_deref());

    let flag = |field: &str| Issue::PlacementRequired {
        field: field.to_string(),
    };

    let mut issues = Vec::new();
    if cohorts.is_empty() && schools.is_empty() {
        issues.push(flag(fields::COHORT));
        issues.push(flag(fields::SCHOOL));
    }
    if !classes.is_empty() && schools.is_empty() {
        issues.push(flag(fields::CLASS));
        issues.push(flag(fields::SCHOOL));
    }
    issues
}

/// Rules for users created from a roster upload.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddUsersProfile {
    options: ValidationOptions,
}

impl AddUsersProfile {
    pub fn new(options: ValidationOptions) -> Self {
        Self { options }
    }
}

impl RowProfile for AddUsersProfile {
    type Record = AddUserRecord;

    fn validate_row(&self, row: &Row) -> Result<AddUserRecord, Vec<Issue>> {
        let draft = AddUserDraft::from_row(row);
        let today = self.options.reference_date;
        let issues: Vec<Issue> = RULES.iter().flat_map(|rule| rule(&draft, today)).collect();

        if !issues.is_empty() {
            return Err(issues);
        }
        draft.into_record().ok_or_else(|| {
            vec![Issue::UserTypeRequired {
                field: fields::USERTYPE.to_string(),
            }]
        })
    }
}
