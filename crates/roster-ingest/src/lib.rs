//! Roster file loading.
//!
//! Turns roster files into the rows the validator works on. CSV files are
//! tokenized by the `csv` crate with the first record as the header row; JSON
//! files hold an array of row objects. Loading does no validation of its own.
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::read_rows;
//!
//! let rows = read_rows(Path::new("roster.csv"))?;
//! ```

mod csv_rows;
mod error;
mod json_rows;

use std::path::Path;

use roster_model::Row;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_rows::{parse_roster_csv, read_roster_csv, read_roster_csv_headers};
pub use json_rows::{read_rows_json, read_submission_json, rows_from_json};

/// Supported roster file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Json,
}

impl RosterFormat {
    /// Format implied by the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Read a `.csv` or `.json` roster file into rows.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    match RosterFormat::from_path(path)? {
        RosterFormat::Csv => read_roster_csv(path),
        RosterFormat::Json => read_rows_json(path),
    }
}

/// Column names of a roster file: the CSV header row, or the keys of the
/// first object of a JSON roster.
pub fn read_headers(path: &Path) -> Result<Vec<String>> {
    match RosterFormat::from_path(path)? {
        RosterFormat::Csv => read_roster_csv_headers(path),
        RosterFormat::Json => Ok(read_rows_json(path)?
            .first()
            .map(|row| row.headers().map(str::to_string).collect())
            .unwrap_or_default()),
    }
}
