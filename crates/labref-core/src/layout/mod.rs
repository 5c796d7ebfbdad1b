pub mod builtin;
pub mod schema;

use crate::error::LabrefError;
use schema::LayoutDef;
use std::collections::BTreeSet;
use std::path::Path;

/// Load a layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<LayoutDef, LabrefError> {
    let content = std::fs::read_to_string(path).map_err(|e| LabrefError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_layout(&content, path)
}

/// Parse a layout from a JSON string.
pub fn parse_layout(json: &str, source: &Path) -> Result<LayoutDef, LabrefError> {
    let layout: LayoutDef = serde_json::from_str(json).map_err(|e| LabrefError::LayoutLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Parse a layout from a JSON string (no file path context).
pub fn parse_layout_str(json: &str) -> Result<LayoutDef, LabrefError> {
    let layout: LayoutDef = serde_json::from_str(json).map_err(LabrefError::Json)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout is well-formed.
pub fn validate_layout(layout: &LayoutDef) -> Result<(), LabrefError> {
    if layout.name.trim().is_empty() {
        return Err(LabrefError::LayoutInvalid("name must not be empty".into()));
    }

    if layout.encodings.is_empty() {
        return Err(LabrefError::LayoutInvalid(
            "encodings must not be empty".into(),
        ));
    }

    check_columns("price", &layout.price.all())?;
    check_columns("reference", &layout.reference.all())?;

    Ok(())
}

fn check_columns(side: &str, columns: &[(&str, &str)]) -> Result<(), LabrefError> {
    let mut seen = BTreeSet::new();
    for (field, column) in columns {
        if column.trim().is_empty() {
            return Err(LabrefError::LayoutInvalid(format!(
                "{side} column for '{field}' must not be empty"
            )));
        }
        if !seen.insert(*column) {
            return Err(LabrefError::LayoutInvalid(format!(
                "{side} column '{column}' is mapped more than once"
            )));
        }
    }
    Ok(())
}
