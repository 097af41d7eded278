//! Birth date checks shared by the add-users and submit profiles.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::issue::{Issue, fields};

/// Exactly four ASCII digits.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year regex"));

/// Age at which a child row is rejected.
const ADULT_AGE: i64 = 18;

/// Leading integer of a cell: optional sign, then digits. Anything after the
/// digits is ignored (`"4.0"` reads as 4, `"05x"` as 5). Runs too long for
/// an `i64` saturate.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Fields to flag when a child born in `month`/`year` is 18 or older on
/// `today`.
///
/// Returns nothing unless both values are present and start with an integer.
/// Only the calendar year and month of `today` matter: a child reaching 18
/// this year is flagged from the birth month onwards, on `month` alone.
pub fn child_age_error_fields(
    month: Option<&str>,
    year: Option<&str>,
    today: NaiveDate,
) -> Vec<&'static str> {
    let (Some(month), Some(year)) = (month, year) else {
        return Vec::new();
    };
    let (Some(birth_month), Some(birth_year)) = (parse_leading_int(month), parse_leading_int(year))
    else {
        return Vec::new();
    };

    let current_month = i64::from(today.month());
    let year_diff = i64::from(today.year()).saturating_sub(birth_year);

    if year_diff > ADULT_AGE {
        vec![fields::MONTH, fields::YEAR]
    } else if year_diff < ADULT_AGE {
        Vec::new()
    } else if current_month >= birth_month {
        vec![fields::MONTH]
    } else {
        Vec::new()
    }
}

/// Children need both month and year; each missing one is flagged.
pub fn birth_date_required(is_child: bool, month: Option<&str>, year: Option<&str>) -> Vec<Issue> {
    if !is_child {
        return Vec::new();
    }
    let mut issues = Vec::new();
    if month.is_none() {
        issues.push(Issue::ChildBirthDateRequired {
            field: fields::MONTH.to_string(),
        });
    }
    if year.is_none() {
        issues.push(Issue::ChildBirthDateRequired {
            field: fields::YEAR.to_string(),
        });
    }
    issues
}

pub fn child_age(
    is_child: bool,
    month: Option<&str>,
    year: Option<&str>,
    today: NaiveDate,
) -> Vec<Issue> {
    if !is_child {
        return Vec::new();
    }
    child_age_error_fields(month, year, today)
        .into_iter()
        .map(|field| Issue::ChildTooOld {
            field: field.to_string(),
        })
        .collect()
}

/// A present month must start with an integer from 1 to 12.
pub fn month_range(month: Option<&str>) -> Vec<Issue> {
    match month {
        Some(month) if !parse_leading_int(month).is_some_and(|m| (1..=12).contains(&m)) => {
            vec![Issue::MonthOutOfRange {
                field: fields::MONTH.to_string(),
            }]
        }
        _ => Vec::new(),
    }
}

/// A present year must be exactly four digits.
pub fn year_format(year: Option<&str>) -> Vec<Issue> {
    match year {
        Some(year) if !YEAR_PATTERN.is_match(year) => vec![Issue::YearFormat {
            field: fields::YEAR.to_string(),
        }],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 15).unwrap()
    }

    #[test]
    fn under_eighteen_is_fine() {
        assert!(child_age_error_fields(Some("5"), Some("2010"), date(2024, 6)).is_empty());
    }

    #[test]
    fn over_eighteen_flags_both_fields() {
        assert_eq!(
            child_age_error_fields(Some("5"), Some("2000"), date(2024, 6)),
            vec!["month", "year"]
        );
    }

    #[test]
    fn eighteenth_birthday_depends_on_month() {
        assert_eq!(
            child_age_error_fields(Some("6"), Some("2006"), date(2024, 6)),
            vec!["month"]
        );
        assert!(child_age_error_fields(Some("7"), Some("2006"), date(2024, 6)).is_empty());
    }

    #[test]
    fn leading_integer_is_read() {
        assert_eq!(parse_leading_int("4.0"), Some(4));
        assert_eq!(parse_leading_int(" 05x"), Some(5));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("x5"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn decimal_and_suffixed_months_count_for_age() {
        assert_eq!(
            child_age_error_fields(Some("4.0"), Some("2000"), date(2024, 6)),
            vec!["month", "year"]
        );
        assert_eq!(
            child_age_error_fields(Some("05x"), Some("2006"), date(2024, 6)),
            vec!["month"]
        );
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(
            child_age_error_fields(Some("5"), Some("-2147483648"), date(2024, 6)),
            vec!["month", "year"]
        );
        assert_eq!(
            child_age_error_fields(Some("5"), Some("-99999999999999999999999"), date(2024, 6)),
            vec!["month", "year"]
        );
        assert!(
            child_age_error_fields(Some("5"), Some("99999999999999999999999"), date(2024, 6))
                .is_empty()
        );
    }

    #[test]
    fn unparseable_values_skip_age_check() {
        assert!(child_age_error_fields(Some("May"), Some("1990"), date(2024, 6)).is_empty());
        assert!(child_age_error_fields(Some("5"), None, date(2024, 6)).is_empty());
    }

    #[test]
    fn month_and_year_formats() {
        assert!(month_range(Some("12")).is_empty());
        assert!(month_range(Some(" 3 ")).is_empty());
        assert_eq!(month_range(Some("13")).len(), 1);
        assert_eq!(month_range(Some("0")).len(), 1);
        assert_eq!(month_range(Some("May")).len(), 1);
        assert!(month_range(Some("4.0")).is_empty());
        assert!(month_range(Some("05x")).is_empty());
        assert_eq!(month_range(Some("13.5")).len(), 1);
        assert!(month_range(None).is_empty());

        assert!(year_format(Some("2010")).is_empty());
        assert_eq!(year_format(Some("10")).len(), 1);
        assert_eq!(year_format(Some("2010 ")).len(), 1);
        assert!(year_format(None).is_empty());
    }

    #[test]
    fn missing_birth_fields_flagged_separately() {
        let issues = birth_date_required(true, None, Some("2015"));
        assert_eq!(
            issues,
            vec![Issue::ChildBirthDateRequired {
                field: "month".to_string()
            }]
        );
        assert!(birth_date_required(false, None, None).is_empty());
    }
}
