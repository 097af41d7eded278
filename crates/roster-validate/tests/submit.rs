//! Programmatic add-user submissions.

use chrono::NaiveDate;
use roster_model::{CombinedIssue, UserType};
use roster_validate::{ValidationOptions, validate_add_users_submit};
use serde_json::json;

fn options() -> ValidationOptions {
    ValidationOptions::as_of(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn combined(field: &str, message: &str) -> CombinedIssue {
    CombinedIssue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn accepts_complete_submission() {
    let result = validate_add_users_submit(
        &json!({
            "id": "  u-1 ",
            "userType": "child",
            "month": "3",
            "year": "2016",
            "parentId": "p-1",
            "orgIds": {"districts": ["d1"], "schools": ["s1"], "classes": ["k1"]},
            "assessmentPid": "x-9"
        }),
        &options(),
    );
    assert!(result.success);
    assert!(result.errors.is_empty());
    let data = result.data.unwrap();
    assert_eq!(data.id.as_deref(), Some("u-1"));
    assert_eq!(data.user_type, UserType::Child);
    assert_eq!(data.org_ids.classes, vec!["k1"]);
    assert_eq!(data.extra.get("assessmentPid"), Some(&json!("x-9")));
}

#[test]
fn non_object_input() {
    let result = validate_add_users_submit(&json!([1, 2]), &options());
    assert!(!result.success);
    assert!(result.data.is_none());
    assert_eq!(
        result.errors,
        vec![combined("", "Invalid input: expected object, received array")]
    );
}

#[test]
fn user_type_has_no_alias() {
    let result = validate_add_users_submit(
        &json!({
            "userType": "caregiver",
            "orgIds": {"districts": ["d1"], "groups": ["g1"]}
        }),
        &options(),
    );
    assert_eq!(
        result.errors,
        vec![combined("userType", "userType must be one of: child, parent, teacher")]
    );
}

#[test]
fn missing_org_ids() {
    let result = validate_add_users_submit(&json!({"userType": "teacher"}), &options());
    assert_eq!(
        result.errors,
        vec![combined("orgIds", "Invalid input: expected object, received undefined")]
    );
}

#[test]
fn org_id_placement_rules() {
    let result = validate_add_users_submit(
        &json!({
            "userType": "teacher",
            "orgIds": {"districts": [], "classes": ["k1"]}
        }),
        &options(),
    );
    assert_eq!(
        result.errors,
        vec![
            combined("orgIds.districts", "At least one district is required"),
            combined("orgIds", "Must have either groups OR schools in orgIds"),
            combined("orgIds", "Schools required in orgIds if classes are provided"),
        ]
    );
}

#[test]
fn child_rules_apply_to_submissions() {
    let result = validate_add_users_submit(
        &json!({
            "userType": "child",
            "month": "",
            "year": "1999",
            "orgIds": {"districts": ["d1"], "groups": ["g1"]}
        }),
        &options(),
    );
    assert_eq!(
        result.errors,
        vec![
            combined("month", "Child users must have month and year"),
        ]
    );

    let result = validate_add_users_submit(
        &json!({
            "userType": "child",
            "month": "0",
            "year": "2000",
            "orgIds": {"districts": ["d1"], "groups": ["g1"]}
        }),
        &options(),
    );
    assert_eq!(
        result.errors,
        vec![
            combined("month and year", "Child users must be under 18 years old"),
            combined("month", "Month must be between 1 and 12"),
        ]
    );
}
