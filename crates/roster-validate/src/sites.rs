//! Site detection across an upload.

use roster_model::{CellValue, Row, SiteInfo};

use crate::issue::fields;
use crate::normalize::parse_comma_separated;

/// Sites named by a row's `site` column (any casing), split on commas.
pub fn row_sites(row: &Row) -> Vec<String> {
    let Some(text) = row
        .get_ignore_case(fields::SITE)
        .filter(|value| !value.is_blank())
        .and_then(CellValue::as_text)
    else {
        return Vec::new();
    };
    parse_comma_separated(Some(&*text))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// True when the row names at least one site.
pub fn has_site(row: &Row) -> bool {
    !row_sites(row).is_empty()
}

/// Distinct sites across all rows, in order of first appearance.
///
/// Rows without a site column contribute nothing.
pub fn detect_multiple_sites(rows: &[Row]) -> SiteInfo {
    let mut unique_sites: Vec<String> = Vec::new();
    for site in rows.iter().flat_map(row_sites) {
        if !unique_sites.contains(&site) {
            unique_sites.push(site);
        }
    }
    SiteInfo {
        has_multiple_sites: unique_sites.len() > 1,
        unique_sites,
    }
}
