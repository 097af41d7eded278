//! Roster CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use roster_model::{CellValue, Row};

use crate::error::{IngestError, Result};

/// Trim a header cell and drop a UTF-8 byte order mark.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = source.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse CSV text into rows keyed by header.
///
/// Every cell becomes [`CellValue::Text`], untrimmed. A short record only
/// carries the columns it has; fields beyond the header row are dropped.
pub fn parse_roster_csv(content: &str, path: &Path) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        if record.len() > headers.len() {
            tracing::warn!(
                path = %path.display(),
                line = record.position().map(csv::Position::line),
                extra = record.len() - headers.len(),
                "Ignoring fields beyond the header row"
            );
        }
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), CellValue::from(value)))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Read only the header row of a roster CSV file.
pub fn read_roster_csv_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;
    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .iter()
        .map(normalize_header)
        .collect();
    Ok(headers)
}

/// Read a roster CSV file into rows.
pub fn read_roster_csv(path: &Path) -> Result<Vec<Row>> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let rows = parse_roster_csv(&content, path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Read roster CSV");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<Row> {
        parse_roster_csv(content, Path::new("test.csv")).unwrap()
    }

    #[test]
    fn reads_rows_as_text() {
        let rows = parse("UserType,Month,Site\nchild,5,\"North, South\"\nteacher,,A\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Month"), Some(&CellValue::from("5")));
        assert_eq!(rows[0].get("Site"), Some(&CellValue::from("North, South")));
        assert_eq!(rows[1].get("Month"), Some(&CellValue::from("")));
    }

    #[test]
    fn strips_bom_and_header_whitespace() {
        let rows = parse("\u{feff}UserType , School\n child ,s1\n");
        let headers: Vec<&str> = rows[0].headers().collect();
        assert_eq!(headers, vec!["UserType", "School"]);
        assert_eq!(rows[0].get("UserType"), Some(&CellValue::from(" child ")));
    }

    #[test]
    fn short_records_omit_missing_columns() {
        let rows = parse("usertype,cohort,site\nparent,c1\n");
        assert_eq!(rows[0].len(), 2);
        assert!(!rows[0].contains_key("site"));
    }

    #[test]
    fn header_only_file_has_no_rows() {
        assert!(parse("usertype,site\n").is_empty());
        assert!(parse("").is_empty());
    }
}
