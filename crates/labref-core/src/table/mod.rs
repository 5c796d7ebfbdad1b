pub mod delimited;
pub mod encoding;
pub mod workbook;

use crate::error::LabrefError;
pub use encoding::{Encoding, DEFAULT_ENCODINGS};
use std::fmt;
use std::path::Path;

/// Where a loaded table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// Delimited text decoded with the given encoding.
    Delimited(Encoding),
    /// First worksheet of a spreadsheet.
    Workbook { sheet: String },
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Delimited(enc) => write!(f, "csv ({enc})"),
            TableSource::Workbook { sheet } => write!(f, "sheet '{sheet}'"),
        }
    }
}

/// A fully loaded table: one header row plus data rows.
///
/// Every row has exactly `headers.len()` cells; short rows are padded with
/// empty strings when the table is built.
#[derive(Debug, Clone)]
pub struct Table {
    pub source: TableSource,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(source: TableSource, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Table {
            source,
            headers,
            rows,
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of the first header equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            headers: &self.headers,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row viewed as an ordered field-name -> value mapping.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.values.get(idx).map(|s| s.as_str())
    }

    /// Like `get`, but an absent column reads as an empty string.
    pub fn get_or_empty(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }
}

/// Spreadsheet extensions routed to the workbook reader.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|w| ext.eq_ignore_ascii_case(w))
        })
        .unwrap_or(false)
}

/// Load a table that must contain `required_column`.
///
/// Spreadsheets are read directly. Delimited files are decoded with each
/// candidate encoding in turn; the first one that decodes, parses and
/// exposes the column wins.
pub fn read_table(
    path: &Path,
    required_column: &str,
    encodings: &[Encoding],
) -> Result<Table, LabrefError> {
    if !path.exists() {
        return Err(LabrefError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if is_workbook(path) {
        let table = workbook::read_first_sheet(path)?;
        if !table.has_column(required_column) {
            return Err(LabrefError::MissingColumn {
                path: path.to_path_buf(),
                column: required_column.to_string(),
            });
        }
        log::info!(
            "loaded {} row(s) from {} ({})",
            table.len(),
            path.display(),
            table.source
        );
        return Ok(table);
    }

    let bytes = std::fs::read(path)?;
    let mut parsed_any = false;

    for &encoding in encodings {
        let Some(text) = encoding.decode(&bytes) else {
            log::debug!("{} is not valid {encoding}", path.display());
            continue;
        };

        let table = match delimited::parse(&text, encoding) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("error reading {} with encoding {encoding}: {e}", path.display());
                continue;
            }
        };
        parsed_any = true;

        if table.has_column(required_column) {
            log::info!(
                "loaded {} row(s) from {} ({})",
                table.len(),
                path.display(),
                table.source
            );
            return Ok(table);
        }

        log::warn!(
            "column '{required_column}' not found in {} with encoding {encoding}",
            path.display()
        );
    }

    if parsed_any {
        Err(LabrefError::MissingColumn {
            path: path.to_path_buf(),
            column: required_column.to_string(),
        })
    } else {
        Err(LabrefError::EncodingExhausted {
            path: path.to_path_buf(),
            encodings: encodings.iter().map(|e| e.label().to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn short_rows_are_padded() {
        let table = Table::new(
            TableSource::Delimited(Encoding::Utf8),
            vec!["A".into(), "B".into()],
            vec![vec!["1".into()]],
        );
        let record = table.records().next().unwrap();
        assert_eq!(record.get("B"), Some(""));
        assert_eq!(record.get("C"), None);
        assert_eq!(record.get_or_empty("C"), "");
    }

    #[test]
    fn workbook_detection_by_extension() {
        assert!(is_workbook(Path::new("prices.xlsx")));
        assert!(is_workbook(Path::new("prices.XLS")));
        assert!(!is_workbook(Path::new("prices.csv")));
        assert!(!is_workbook(Path::new("prices")));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let err = read_table(&dir.path().join("nope.csv"), "Test Name", DEFAULT_ENCODINGS)
            .unwrap_err();
        assert!(matches!(err, LabrefError::FileNotFound { .. }));
    }

    #[test]
    fn utf8_file_loads_with_first_encoding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.csv");
        fs::write(&path, "\u{feff}Test Name,Units\nCBC,cells/\u{b5}L\n").unwrap();

        let table = read_table(&path, "Test Name", DEFAULT_ENCODINGS).unwrap();
        assert_eq!(table.source, TableSource::Delimited(Encoding::Utf8));
        assert_eq!(table.rows[0][1], "cells/\u{b5}L");
    }

    #[test]
    fn latin1_fallback_when_not_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.csv");
        fs::write(&path, b"Test Name,Units\nFerritin,\xB5g/L\n").unwrap();

        let table = read_table(&path, "Test Name", DEFAULT_ENCODINGS).unwrap();
        assert_eq!(table.source, TableSource::Delimited(Encoding::Latin1));
        assert_eq!(table.rows[0][1], "\u{b5}g/L");
    }

    #[test]
    fn missing_column_after_all_encodings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.csv");
        fs::write(&path, "Name,Units\nCBC,x\n").unwrap();

        let err = read_table(&path, "Test Name", DEFAULT_ENCODINGS).unwrap_err();
        match err {
            LabrefError::MissingColumn { column, .. } => assert_eq!(column, "Test Name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn encoding_exhausted_when_nothing_decodes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ref.csv");
        fs::write(&path, b"Test Name\n\xFF\xFE\n").unwrap();

        let err = read_table(&path, "Test Name", &[Encoding::Utf8]).unwrap_err();
        match err {
            LabrefError::EncodingExhausted { encodings, .. } => {
                assert_eq!(encodings, vec!["utf-8".to_string()])
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
