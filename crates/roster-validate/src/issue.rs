//! Rule violation types.
//!
//! Each variant names the field it was raised on; the user-facing message is
//! fixed per variant and is part of the upload contract (the UI shows it as
//! is and callers match on it).

use roster_model::FieldIssue;

/// Column names used by the roster rules, as seen after normalization.
pub mod fields {
    pub const ID: &str = "id";
    pub const UID: &str = "uid";
    pub const USERTYPE: &str = "usertype";
    pub const MONTH: &str = "month";
    pub const YEAR: &str = "year";
    pub const CAREGIVER_ID: &str = "caregiverid";
    pub const TEACHER_ID: &str = "teacherid";
    pub const SITE: &str = "site";
    pub const COHORT: &str = "cohort";
    pub const SCHOOL: &str = "school";
    pub const CLASS: &str = "class";
}

pub const USER_TYPE_REQUIRED: &str = "userType is required";
pub const USER_TYPE_INVALID: &str = "userType must be one of: child, parent, teacher";
pub const CHILD_BIRTH_DATE_REQUIRED: &str = "Child users must have month and year";
pub const CHILD_TOO_OLD: &str = "Child users must be under 18 years old";
pub const MONTH_OUT_OF_RANGE: &str = "Month must be between 1 and 12";
pub const YEAR_FORMAT: &str = "Year must be a four-digit number";
pub const PLACEMENT_REQUIRED: &str =
    "Must have either cohort OR school. School required if class provided.";
pub const ID_REQUIRED: &str = "ID is required";
pub const UID_REQUIRED: &str = "UID is required";
pub const DISTRICT_REQUIRED: &str = "At least one district is required";
pub const GROUPS_OR_SCHOOLS_REQUIRED: &str = "Must have either groups OR schools in orgIds";
pub const SCHOOLS_REQUIRED_FOR_CLASSES: &str =
    "Schools required in orgIds if classes are provided";
pub const EMPTY_ORG_ID: &str = "Too small: expected string to have >=1 characters";
pub const SITE_REQUIRED: &str = "Site: Site is required";

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    // Identity
    /// User type missing or blank
    UserTypeRequired { field: String },
    /// User type not one of the roster types
    UserTypeInvalid { field: String },
    /// Link row without an id
    IdRequired { field: String },
    /// Link row without a uid
    UidRequired { field: String },

    // Birth date
    /// Child without month or year
    ChildBirthDateRequired { field: String },
    /// Child turned 18 or older
    ChildTooOld { field: String },
    /// Month not an integer in 1..=12
    MonthOutOfRange { field: String },
    /// Year not exactly four digits
    YearFormat { field: String },

    // Placement
    /// Neither cohort nor school, or class without school
    PlacementRequired { field: String },
    /// Submission without a district
    DistrictRequired { field: String },
    /// Submission with neither groups nor schools
    GroupsOrSchoolsRequired { field: String },
    /// Submission with classes but no schools
    SchoolsRequiredForClasses { field: String },
    /// Blank organization id in a submission list
    EmptyOrgId { field: String },

    // Shape
    /// Submitted value has the wrong JSON type
    InvalidType {
        field: String,
        expected: &'static str,
        received: &'static str,
    },
}

impl Issue {
    /// Dot-joined path of the offending field (empty for the whole record).
    pub fn field(&self) -> &str {
        match self {
            Issue::UserTypeRequired { field }
            | Issue::UserTypeInvalid { field }
            | Issue::IdRequired { field }
            | Issue::UidRequired { field }
            | Issue::ChildBirthDateRequired { field }
            | Issue::ChildTooOld { field }
            | Issue::MonthOutOfRange { field }
            | Issue::YearFormat { field }
            | Issue::PlacementRequired { field }
            | Issue::DistrictRequired { field }
            | Issue::GroupsOrSchoolsRequired { field }
            | Issue::SchoolsRequiredForClasses { field }
            | Issue::EmptyOrgId { field }
            | Issue::InvalidType { field, .. } => field,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::UserTypeRequired { .. } => USER_TYPE_REQUIRED.to_string(),
            Issue::UserTypeInvalid { .. } => USER_TYPE_INVALID.to_string(),
            Issue::IdRequired { .. } => ID_REQUIRED.to_string(),
            Issue::UidRequired { .. } => UID_REQUIRED.to_string(),
            Issue::ChildBirthDateRequired { .. } => CHILD_BIRTH_DATE_REQUIRED.to_string(),
            Issue::ChildTooOld { .. } => CHILD_TOO_OLD.to_string(),
            Issue::MonthOutOfRange { .. } => MONTH_OUT_OF_RANGE.to_string(),
            Issue::YearFormat { .. } => YEAR_FORMAT.to_string(),
            Issue::PlacementRequired { .. } => PLACEMENT_REQUIRED.to_string(),
            Issue::DistrictRequired { .. } => DISTRICT_REQUIRED.to_string(),
            Issue::GroupsOrSchoolsRequired { .. } => GROUPS_OR_SCHOOLS_REQUIRED.to_string(),
            Issue::SchoolsRequiredForClasses { .. } => SCHOOLS_REQUIRED_FOR_CLASSES.to_string(),
            Issue::EmptyOrgId { .. } => EMPTY_ORG_ID.to_string(),
            Issue::InvalidType {
                expected, received, ..
            } => format!("Invalid input: expected {expected}, received {received}"),
        }
    }
}

impl From<&Issue> for FieldIssue {
    fn from(issue: &Issue) -> Self {
        FieldIssue::new(issue.field(), issue.message())
    }
}

impl From<Issue> for FieldIssue {
    fn from(issue: Issue) -> Self {
        FieldIssue::from(&issue)
    }
}

/// Convert rule violations into labeled issues, keeping their order.
pub fn to_field_issues(issues: &[Issue]) -> Vec<FieldIssue> {
    issues.iter().map(FieldIssue::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_type_message() {
        let issue = Issue::InvalidType {
            field: "month".to_string(),
            expected: "string",
            received: "number",
        };
        assert_eq!(issue.field(), "month");
        assert_eq!(
            issue.message(),
            "Invalid input: expected string, received number"
        );
    }

    #[test]
    fn converts_to_field_issue() {
        let issue = Issue::PlacementRequired {
            field: fields::COHORT.to_string(),
        };
        let labeled = FieldIssue::from(&issue);
        assert_eq!(labeled.field, "cohort");
        assert_eq!(labeled.message, PLACEMENT_REQUIRED);
    }
}
