use std::path::Path;

use crate::error::LabrefError;
use crate::layout::schema::{LayoutDef, PriceColumns, ReferenceColumns};
use crate::model::{Price, PriceEntry, ReferenceEntry};
use crate::table::{read_table, Table};

/// Build price entries from a loaded price table.
///
/// Rows with a blank test name are dropped. Names are trimmed; the other
/// cells are kept as written.
pub fn price_entries(table: &Table, columns: &PriceColumns) -> Vec<PriceEntry> {
    let mut dropped = 0usize;
    let entries: Vec<PriceEntry> = table
        .records()
        .filter_map(|record| {
            let name = record.get_or_empty(&columns.test_name).trim();
            if name.is_empty() {
                dropped += 1;
                return None;
            }
            Some(PriceEntry {
                test_name: name.to_string(),
                price: Price::new(record.get_or_empty(&columns.price)),
                category: record.get_or_empty(&columns.category).to_string(),
            })
        })
        .collect();

    if dropped > 0 {
        log::debug!("dropped {dropped} price row(s) without a test name");
    }
    entries
}

/// Build reference entries from a loaded reference table.
///
/// `category` is `None` on every entry when the table has no category
/// column at all, so callers can tell "no column" from "empty cell".
pub fn reference_entries(table: &Table, columns: &ReferenceColumns) -> Vec<ReferenceEntry> {
    let has_category = table.has_column(&columns.category);
    let mut dropped = 0usize;
    let entries: Vec<ReferenceEntry> = table
        .records()
        .filter_map(|record| {
            let name = record.get_or_empty(&columns.test_name).trim();
            if name.is_empty() {
                dropped += 1;
                return None;
            }
            let cell = |column: &str| record.get_or_empty(column).to_string();
            Some(ReferenceEntry {
                category: has_category.then(|| cell(&columns.category)),
                test_name: name.to_string(),
                description: cell(&columns.description),
                units: cell(&columns.units),
                gender: cell(&columns.gender),
                min_range: cell(&columns.min_range),
                max_range: cell(&columns.max_range),
                age_min: cell(&columns.age_min),
                age_min_unit: cell(&columns.age_min_unit),
                age_max: cell(&columns.age_max),
                age_max_unit: cell(&columns.age_max_unit),
            })
        })
        .collect();

    if dropped > 0 {
        log::debug!("dropped {dropped} reference row(s) without a test name");
    }
    entries
}

/// Read and convert the price list at `path`.
pub fn load_price_list(path: &Path, layout: &LayoutDef) -> Result<Vec<PriceEntry>, LabrefError> {
    let table = read_table(path, &layout.price.test_name, &layout.encodings)?;
    Ok(price_entries(&table, &layout.price))
}

/// Read and convert the reference-range table at `path`.
pub fn load_reference_table(
    path: &Path,
    layout: &LayoutDef,
) -> Result<Vec<ReferenceEntry>, LabrefError> {
    let table = read_table(path, &layout.reference.test_name, &layout.encodings)?;
    if !table.has_column(&layout.reference.category) {
        log::warn!(
            "column '{}' not found in {}; reference-only tests will not carry categories",
            layout.reference.category,
            path.display()
        );
    }
    Ok(reference_entries(&table, &layout.reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builtin::load_preset;
    use crate::table::{Encoding, TableSource};

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            TableSource::Delimited(Encoding::Utf8),
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn price_rows_are_trimmed_and_blank_names_dropped() {
        let layout = load_preset("tiamed").unwrap();
        let t = table(
            &["LabTest Name", "Price(INR)", "Category Name"],
            &[
                &["  CBC ", "300", "Hematology"],
                &["", "100", "Misc"],
                &["   ", "50", "Misc"],
                &["Vitamin D", "1,200", "Biochemistry"],
            ],
        );
        let entries = price_entries(&t, &layout.price);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].test_name, "CBC");
        assert_eq!(entries[0].price.as_str(), "300");
        assert_eq!(entries[1].category, "Biochemistry");
    }

    #[test]
    fn missing_optional_price_columns_read_empty() {
        let layout = load_preset("tiamed").unwrap();
        let t = table(&["LabTest Name"], &[&["CBC"]]);
        let entries = price_entries(&t, &layout.price);
        assert_eq!(entries[0].price.as_str(), "");
        assert_eq!(entries[0].category, "");
    }

    #[test]
    fn reference_rows_keep_all_fields() {
        let layout = load_preset("tiamed").unwrap();
        let t = table(
            &[
                "Category",
                "Test Name",
                "Units",
                "Gender",
                "Min Reference Range",
                "Max Reference Range",
            ],
            &[&["Hormones", " Testosterone", "ng/dL", "Male", "300", "1000"]],
        );
        let entries = reference_entries(&t, &layout.reference);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.category.as_deref(), Some("Hormones"));
        assert_eq!(e.test_name, "Testosterone");
        assert_eq!(e.gender, "Male");
        assert_eq!(e.max_range, "1000");
        assert_eq!(e.age_min, "");
    }

    #[test]
    fn reference_without_category_column() {
        let layout = load_preset("tiamed").unwrap();
        let t = table(&["Test Name"], &[&["CBC"]]);
        let entries = reference_entries(&t, &layout.reference);
        assert_eq!(entries[0].category, None);
    }
}
