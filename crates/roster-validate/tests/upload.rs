//! Bulk upload orchestration.

use chrono::NaiveDate;
use roster_model::{CellValue, Row};
use roster_validate::{SitePolicy, UploadOptions, ValidationOptions, validate_add_users_upload};

fn options(site_policy: SitePolicy) -> UploadOptions {
    UploadOptions::new(site_policy).with_validation(ValidationOptions::as_of(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ))
}

fn row(cells: &[(&str, &str)]) -> Row {
    cells.iter().copied().collect()
}

#[test]
fn empty_batch_fails_without_errors() {
    let result = validate_add_users_upload(Vec::new(), &options(SitePolicy::RequireColumn));
    insta::assert_json_snapshot!(result, @r#"
    {
      "success": false,
      "errors": [],
      "data": [],
      "hasMultipleSites": false,
      "uniqueSites": []
    }
    "#);
}

#[test]
fn missing_headers_stop_before_row_rules() {
    let rows = vec![row(&[("UserType", "child"), ("Cohort", "c1")])];
    let result = validate_add_users_upload(rows, &options(SitePolicy::RequireColumn));
    insta::assert_json_snapshot!(result, @r#"
    {
      "success": false,
      "errors": [],
      "data": [],
      "hasMultipleSites": false,
      "uniqueSites": [],
      "headerErrors": [
        {
          "field": "month",
          "message": "Missing required header: month"
        },
        {
          "field": "year",
          "message": "Missing required header: year"
        },
        {
          "field": "site",
          "message": "Missing required header: site"
        }
      ]
    }
    "#);
}

#[test]
fn row_errors_then_site_errors() {
    let rows = vec![
        row(&[
            ("UserType", " child "),
            ("Month", "5"),
            ("Year", "2010"),
            ("Cohort", "c1"),
            ("Site", "North"),
        ]),
        row(&[("UserType", "caregiver"), ("Cohort", ""), ("Site", "South")]),
        row(&[("UserType", "teacher"), ("Cohort", "c2"), ("Site", "")]),
    ];
    let result = validate_add_users_upload(rows, &options(SitePolicy::RequireColumn));
    insta::assert_json_snapshot!(result, @r#"
    {
      "success": false,
      "errors": [
        {
          "row": 2,
          "user": {
            "UserType": "caregiver",
            "Cohort": "",
            "Site": "South"
          },
          "error": "cohort, school: Must have either cohort OR school. School required if class provided."
        },
        {
          "row": 3,
          "user": {
            "UserType": "teacher",
            "Cohort": "c2",
            "Site": ""
          },
          "error": "Site: Site is required"
        }
      ],
      "data": [
        {
          "UserType": "child",
          "Month": "5",
          "Year": "2010",
          "Cohort": "c1",
          "Site": "North"
        },
        {
          "UserType": "caregiver",
          "Cohort": "",
          "Site": "South"
        },
        {
          "UserType": "teacher",
          "Cohort": "c2",
          "Site": ""
        }
      ],
      "hasMultipleSites": true,
      "uniqueSites": [
        "North",
        "South"
      ]
    }
    "#);
}

#[test]
fn provisioned_rows_skip_rules_but_stay_in_data() {
    let rows = vec![
        row(&[("id", ""), ("usertype", "teacher"), ("school", "s1"), ("site", "A")]),
        row(&[("ID", "existing-1"), ("usertype", "nonsense"), ("site", "")]),
    ];
    let result = validate_add_users_upload(rows, &options(SitePolicy::RequireColumn));
    assert!(result.success);
    assert!(result.errors.is_empty());
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.data[1].get("ID"), Some(&CellValue::from("existing-1")));
    assert_eq!(result.unique_sites, vec!["A"]);
}

#[test]
fn per_user_errors_are_joined() {
    let rows = vec![row(&[
        ("usertype", "child"),
        ("month", "14"),
        ("year", ""),
        ("class", "k1"),
        ("cohort", ""),
        ("site", "A"),
    ])];
    let result = validate_add_users_upload(rows, &options(SitePolicy::RequireColumn));
    assert!(!result.success);
    assert!(result.header_errors.is_none());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 1);
    assert_eq!(
        result.errors[0].error,
        "year: Child users must have month and year; \
         month: Month must be between 1 and 12; \
         cohort, school, class: Must have either cohort OR school. School required if class provided."
    );
}

#[test]
fn site_from_permissions_skips_site_checks() {
    let rows = vec![
        row(&[("usertype", "parent"), ("cohort", "c1")]),
        row(&[("usertype", "teacher"), ("school", "s1"), ("site", "B,C")]),
    ];
    let result = validate_add_users_upload(rows, &options(SitePolicy::FromPermissions));
    assert!(result.success);
    assert!(result.has_multiple_sites);
    assert_eq!(result.unique_sites, vec!["B", "C"]);
}

#[test]
fn rows_with_errors_get_no_extra_site_error() {
    let rows = vec![row(&[("usertype", "robot"), ("cohort", "c1"), ("site", "")])];
    let result = validate_add_users_upload(rows, &options(SitePolicy::RequireColumn));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].error,
        "userType: userType must be one of: child, parent, teacher"
    );
}
