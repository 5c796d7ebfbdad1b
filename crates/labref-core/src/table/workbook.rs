use std::path::Path;

use calamine::{Data, Reader};

use super::{Table, TableSource};
use crate::error::LabrefError;

/// Read the first worksheet of a spreadsheet. Row 1 is the header row.
pub fn read_first_sheet(path: &Path) -> Result<Table, LabrefError> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| LabrefError::Workbook(format!("failed to open {}: {e}", path.display())))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LabrefError::Workbook(format!("{} has no worksheets", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| LabrefError::Workbook(format!("sheet '{sheet}' unreadable: {e}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_text).collect(),
        None => Vec::new(),
    };

    let body = rows
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    Ok(Table::new(TableSource::Workbook { sheet }, headers, body))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::Empty => String::new(),
        _ => format!("{cell}"),
    }
}
