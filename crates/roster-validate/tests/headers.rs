//! Header validation and required-header computation.

use proptest::prelude::*;
use roster_model::Row;
use roster_validate::{SitePolicy, compute_required_headers, validate_headers};

const KNOWN: [&str; 8] = [
    "usertype", "month", "year", "cohort", "school", "class", "site", "id",
];

fn restyle(header: &str, upper: bool, padded: bool) -> String {
    let cased = if upper {
        header.to_uppercase()
    } else {
        header.to_string()
    };
    if padded { format!(" {cased} ") } else { cased }
}

proptest! {
    #[test]
    fn succeeds_iff_every_required_header_present(
        present in prop::sample::subsequence(KNOWN.to_vec(), 0..=KNOWN.len()),
        required in prop::sample::subsequence(KNOWN.to_vec(), 0..=KNOWN.len()),
        upper in any::<bool>(),
        padded in any::<bool>(),
        extras in prop::collection::vec("x[a-z]{1,4}", 0..3),
        seed in any::<u64>(),
    ) {
        let mut headers: Vec<String> = present
            .iter()
            .map(|header| restyle(header, upper, padded))
            .chain(extras)
            .collect();
        // Header order never matters.
        if !headers.is_empty() {
            let len = headers.len();
            headers.rotate_left((seed % len as u64) as usize);
        }

        let result = validate_headers(&headers, &required);
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|header| !present.contains(header))
            .collect();

        prop_assert_eq!(result.success, missing.is_empty());
        let reported: Vec<&str> = result.errors.iter().map(|issue| issue.field.as_str()).collect();
        prop_assert_eq!(reported, missing);
    }
}

#[test]
fn missing_header_message() {
    let result = validate_headers(&["usertype"], &["usertype", "Site"]);
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field, "site");
    assert_eq!(result.errors[0].message, "Missing required header: site");
}

#[test]
fn required_headers_follow_batch_content() {
    let rows = vec![
        Row::from_iter([("UserType", "parent"), ("Cohort", "c1"), ("Site", "A")]),
        Row::from_iter([("UserType", "child"), ("Cohort", "c1"), ("Site", "A")]),
    ];
    assert_eq!(
        compute_required_headers(&rows, SitePolicy::RequireColumn),
        vec!["usertype", "month", "year", "site"]
    );
    assert_eq!(
        compute_required_headers(&rows[..1], SitePolicy::FromPermissions),
        vec!["usertype"]
    );
}

#[test]
fn placement_headers_checked_on_first_row_only() {
    let rows = vec![
        Row::from_iter([("usertype", "teacher")]),
        Row::from_iter([("usertype", "teacher"), ("school", "s1")]),
    ];
    assert_eq!(
        compute_required_headers(&rows, SitePolicy::FromPermissions),
        vec!["usertype", "cohort", "school"]
    );
}
