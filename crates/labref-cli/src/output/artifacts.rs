use labref_core::error::LabrefError;
use labref_core::layout::schema::LayoutDef;
use labref_core::reconcile::{CategorizedName, NameDiff, ReferenceExpansion};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ALL_RESULTS_FILE: &str = "all_test_results.json";
pub const WITH_REFERENCES_FILE: &str = "tests_with_references.json";
pub const WITHOUT_REFERENCES_FILE: &str = "tests_without_references.json";

pub const EXACT_MATCHES_FILE: &str = "exact_matches.csv";
pub const CASE_MISMATCHES_FILE: &str = "case_mismatches.csv";
pub const PRICE_ONLY_FILE: &str = "tests_only_in_price_list.csv";
pub const REFERENCE_ONLY_FILE: &str = "tests_only_in_reference.csv";

/// Write the three expansion reports into `dir`, creating it if needed.
pub fn write_expansion(
    dir: &Path,
    expansion: &ReferenceExpansion,
) -> Result<Vec<PathBuf>, LabrefError> {
    fs::create_dir_all(dir)?;

    let all = dir.join(ALL_RESULTS_FILE);
    let with = dir.join(WITH_REFERENCES_FILE);
    let without = dir.join(WITHOUT_REFERENCES_FILE);

    write_json(&all, expansion)?;
    write_json(&with, &expansion.matched)?;
    write_json(&without, &expansion.unmatched)?;

    Ok(vec![all, with, without])
}

/// Write the four name-diff reports into `dir`.
///
/// With `categories`, the reference-only report gets a leading Category column.
pub fn write_name_diff(
    dir: &Path,
    names: &NameDiff,
    categories: Option<&[CategorizedName]>,
) -> Result<Vec<PathBuf>, LabrefError> {
    fs::create_dir_all(dir)?;

    let exact = dir.join(EXACT_MATCHES_FILE);
    write_column(&exact, "Exact Matches", &names.exact_matches)?;

    let mismatches = dir.join(CASE_MISMATCHES_FILE);
    let mut writer = csv::Writer::from_path(&mismatches)?;
    writer.write_record(["Price List Name", "Reference Name"])?;
    for (price_name, reference_name) in &names.case_mismatches {
        writer.write_record([price_name, reference_name])?;
    }
    writer.flush()?;

    let price_only = dir.join(PRICE_ONLY_FILE);
    write_column(&price_only, "Tests Only in Price List", &names.price_only)?;

    let reference_only = dir.join(REFERENCE_ONLY_FILE);
    match categories {
        Some(rows) => {
            let mut writer = csv::Writer::from_path(&reference_only)?;
            writer.write_record(["Category", "Tests Only in Reference"])?;
            for row in rows {
                writer.write_record([&row.category, &row.test_name])?;
            }
            writer.flush()?;
        }
        None => write_column(
            &reference_only,
            "Tests Only in Reference",
            &names.reference_only,
        )?,
    }

    Ok(vec![exact, mismatches, price_only, reference_only])
}

/// Write the one-sided reports of a case-sensitive diff, headed by the
/// layout's name columns. Empty buckets produce no file.
pub fn write_exact_diff(
    dir: &Path,
    names: &NameDiff,
    layout: &LayoutDef,
) -> Result<Vec<PathBuf>, LabrefError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    if !names.price_only.is_empty() {
        let path = dir.join(PRICE_ONLY_FILE);
        write_column(&path, &layout.price.test_name, &names.price_only)?;
        written.push(path);
    }

    if !names.reference_only.is_empty() {
        let path = dir.join(REFERENCE_ONLY_FILE);
        write_column(&path, &layout.reference.test_name, &names.reference_only)?;
        written.push(path);
    }

    Ok(written)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), LabrefError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn write_column<'a>(
    path: &Path,
    header: &str,
    values: impl IntoIterator<Item = &'a String>,
) -> Result<(), LabrefError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([header])?;
    for value in values {
        writer.write_record([value])?;
    }
    writer.flush()?;
    Ok(())
}
