//! Rules for a single programmatic add-user submission.
//!
//! Unlike roster rows, a submission is a JSON object with camelCase keys and
//! typed values. Validation runs in two passes: a shape pass checks each key in
//! turn, then the record-level rules run. A type mismatch anywhere (or an
//! unknown user type) stops the record-level pass; content problems such as an
//! empty organization id do not.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use roster_model::{AddUserSubmission, OrgIds, SubmissionValidation, UserType};

use super::birth;
use crate::combine::combine_issues;
use crate::issue::{Issue, to_field_issues};
use crate::options::ValidationOptions;

const ID: &str = "id";
const USER_TYPE: &str = "userType";
const MONTH: &str = "month";
const YEAR: &str = "year";
const CAREGIVER_ID: &str = "caregiverId";
const TEACHER_ID: &str = "teacherId";
const PARENT_ID: &str = "parentId";
const ORG_IDS: &str = "orgIds";

const KNOWN_KEYS: [&str; 8] = [
    ID,
    USER_TYPE,
    MONTH,
    YEAR,
    CAREGIVER_ID,
    TEACHER_ID,
    PARENT_ID,
    ORG_IDS,
];

/// Type name of a JSON value as reported in messages; `undefined` when absent.
pub(crate) fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Issues collected by the shape pass.
#[derive(Debug, Default)]
struct ShapeIssues {
    issues: Vec<Issue>,
    /// Set once an issue makes the value unusable for record-level rules.
    aborted: bool,
}

impl ShapeIssues {
    fn invalid_type(&mut self, field: impl Into<String>, expected: &'static str, value: Option<&Value>) {
        self.issues.push(Issue::InvalidType {
            field: field.into(),
            expected,
            received: json_type_name(value),
        });
        self.aborted = true;
    }

    fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// An optional string property.
    fn optional_string(&mut self, object: &Map<String, Value>, key: &str) -> Option<String> {
        match object.get(key) {
            None => None,
            Some(Value::String(text)) => Some(text.clone()),
            other => {
                self.invalid_type(key, "string", other);
                None
            }
        }
    }

    fn user_type(&mut self, value: Option<&Value>) -> Option<UserType> {
        let user_type = value
            .and_then(Value::as_str)
            .and_then(UserType::from_canonical)
            .filter(UserType::is_roster_type);
        if user_type.is_none() {
            self.push(Issue::UserTypeInvalid {
                field: USER_TYPE.to_string(),
            });
            self.aborted = true;
        }
        user_type
    }

    /// An array of non-empty organization ids at `orgIds.<list>`.
    fn id_list(&mut self, list: &str, value: Option<&Value>, required: bool) -> Vec<String> {
        let path = format!("{ORG_IDS}.{list}");
        let items = match value {
            None if !required => return Vec::new(),
            Some(Value::Array(items)) => items,
            other => {
                self.invalid_type(path, "array", other);
                return Vec::new();
            }
        };

        let mut ids = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(id) => {
                    if id.is_empty() {
                        self.push(Issue::EmptyOrgId {
                            field: format!("{path}.{index}"),
                        });
                    }
                    ids.push(id.clone());
                }
                other => self.invalid_type(format!("{path}.{index}"), "string", Some(other)),
            }
        }
        ids
    }

    fn org_ids(&mut self, value: Option<&Value>) -> Option<OrgIds> {
        let Some(Value::Object(object)) = value else {
            self.invalid_type(ORG_IDS, "object", value);
            return None;
        };

        let aborted_before = self.aborted;
        self.aborted = false;

        let districts = self.id_list("districts", object.get("districts"), true);
        if districts.is_empty() && !self.aborted {
            self.push(Issue::DistrictRequired {
                field: format!("{ORG_IDS}.districts"),
            });
        }
        let org_ids = OrgIds {
            districts,
            groups: self.id_list("groups", object.get("groups"), false),
            schools: self.id_list("schools", object.get("schools"), false),
            classes: self.id_list("classes", object.get("classes"), false),
        };

        let usable = !self.aborted;
        self.aborted |= aborted_before;
        if !usable {
            return None;
        }

        if !org_ids.has_groups() && !org_ids.has_schools() {
            self.push(Issue::GroupsOrSchoolsRequired {
                field: ORG_IDS.to_string(),
            });
        }
        if org_ids.has_classes() && !org_ids.has_schools() {
            self.push(Issue::SchoolsRequiredForClasses {
                field: ORG_IDS.to_string(),
            });
        }
        Some(org_ids)
    }
}

/// Record-level rules, run once the shape pass produced a usable value.
fn record_issues(
    user_type: UserType,
    month: Option<&str>,
    year: Option<&str>,
    today: NaiveDate,
) -> Vec<Issue> {
    // Empty strings count as absent here.
    let month = month.filter(|value| !value.is_empty());
    let year = year.filter(|value| !value.is_empty());
    let is_child = user_type == UserType::Child;

    let mut issues = birth::birth_date_required(is_child, month, year);
    issues.extend(birth::child_age(is_child, month, year, today));
    issues.extend(birth::month_range(month));
    issues.extend(birth::year_format(year));
    issues
}

fn failure(issues: &[Issue]) -> SubmissionValidation {
    SubmissionValidation {
        success: false,
        data: None,
        errors: combine_issues(&to_field_issues(issues)),
    }
}

/// Validate one add-user submission.
pub fn validate_submission(value: &Value, options: &ValidationOptions) -> SubmissionValidation {
    let Value::Object(object) = value else {
        return failure(&[Issue::InvalidType {
            field: String::new(),
            expected: "object",
            received: json_type_name(Some(value)),
        }]);
    };

    let mut shape = ShapeIssues::default();
    let id = shape.optional_string(object, ID);
    let user_type = shape.user_type(object.get(USER_TYPE));
    let month = shape.optional_string(object, MONTH);
    let year = shape.optional_string(object, YEAR);
    let caregiver_id = shape.optional_string(object, CAREGIVER_ID);
    let teacher_id = shape.optional_string(object, TEACHER_ID);
    let parent_id = shape.optional_string(object, PARENT_ID);
    let org_ids = shape.org_ids(object.get(ORG_IDS));

    let mut issues = shape.issues;
    let (Some(user_type), Some(org_ids), false) = (user_type, org_ids, shape.aborted) else {
        tracing::debug!(issues = issues.len(), "Submission failed shape checks");
        return failure(&issues);
    };

    issues.extend(record_issues(
        user_type,
        month.as_deref(),
        year.as_deref(),
        options.reference_date,
    ));
    if !issues.is_empty() {
        return failure(&issues);
    }

    let extra = object
        .iter()
        .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    SubmissionValidation {
        success: true,
        data: Some(AddUserSubmission {
            id: id.map(|id| id.trim().to_string()),
            user_type,
            month,
            year,
            caregiver_id,
            teacher_id,
            parent_id,
            org_ids,
            extra,
        }),
        errors: Vec::new(),
    }
}
