//! Row and header normalization.
//!
//! Header casing and blank-cell conventions differ between spreadsheet tools;
//! everything downstream of this module sees lower-cased keys and no blank
//! values.

use roster_model::{CellValue, Row};

/// Lower-case every key and drop blank values (empty string or null).
///
/// Values are otherwise left as they are: no trimming, no type coercion.
/// When two keys collide after lower-casing, the later column wins, including
/// a later blank column removing an earlier value.
pub fn normalize_row(row: &Row) -> Row {
    let mut normalized = Row::new();
    for (key, value) in row.iter() {
        let key = key.to_lowercase();
        if value.is_blank() {
            normalized.remove(&key);
        } else {
            normalized.insert(key, value.clone());
        }
    }
    normalized
}

/// Trim and lower-case header names.
pub fn normalize_headers<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    headers
        .iter()
        .map(|header| header.as_ref().trim().to_lowercase())
        .collect()
}

/// Split a comma-separated cell into trimmed, non-empty parts.
pub fn parse_comma_separated(value: Option<&str>) -> Vec<&str> {
    let Some(value) = value else {
        return Vec::new();
    };
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Display text of a normalized cell.
pub(crate) fn cell_text(row: &Row, key: &str) -> Option<String> {
    row.get(key)
        .and_then(CellValue::as_text)
        .map(std::borrow::Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_keys_and_drops_blanks() {
        let row = Row::from_iter([
            ("UserType", CellValue::from("Child")),
            ("Month", CellValue::from("")),
            ("Year", CellValue::Null),
            ("Site", CellValue::from(" North ")),
        ]);
        let normalized = normalize_row(&row);
        let keys: Vec<&str> = normalized.headers().collect();
        assert_eq!(keys, vec!["usertype", "site"]);
        assert_eq!(normalized.get("usertype"), Some(&CellValue::from("Child")));
        assert_eq!(normalized.get("site"), Some(&CellValue::from(" North ")));
    }

    #[test]
    fn later_blank_column_clears_earlier_value() {
        let row = Row::from_iter([("Site", "North"), ("SITE", "")]);
        assert!(normalize_row(&row).get("site").is_none());
    }

    #[test]
    fn splits_comma_separated_values() {
        assert_eq!(
            parse_comma_separated(Some(" a, ,b ,, c")),
            vec!["a", "b", "c"]
        );
        assert!(parse_comma_separated(Some(" , ")).is_empty());
        assert!(parse_comma_separated(None).is_empty());
    }

    #[test]
    fn normalizes_headers() {
        assert_eq!(
            normalize_headers(&[" UserType ", "SITE"]),
            vec!["usertype", "site"]
        );
    }
}
