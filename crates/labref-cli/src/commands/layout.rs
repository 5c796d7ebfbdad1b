use labref_core::error::LabrefError;
use labref_core::layout::builtin;
use std::path::Path;

pub fn list() -> Result<(), LabrefError> {
    println!("Available predefined layouts:\n");
    for name in builtin::PRESETS {
        let layout = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<8} {}{}", name, layout.name, default_marker);
        if let Some(ref desc) = layout.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), LabrefError> {
    let layout = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

pub fn schema() -> Result<(), LabrefError> {
    print!(
        r#"JSON Layout Schema
==================

A layout file tells labref which columns hold the test name, price and
reference-range fields, and which text encodings to try when reading CSV.
Pass it with `labref expand --layout FILE` or `labref diff --layout FILE`.

Top-level fields:
  name          (string, required)  Human-readable name of the layout
  description   (string, optional)  What this layout is for
  encodings     (array, optional)   Encodings tried in order for CSV input.
                                    Values: "utf-8", "latin1", "cp1252",
                                    "iso-8859-1". Default: all four, in
                                    that order.
  price         (object, required)  Price-list columns (see below)
  reference     (object, required)  Reference-table columns (see below)

price:
  test_name     Column holding the test name (must exist in the file)
  price         Column holding the price
  category      Column holding the test category

reference:
  test_name     Column holding the test name (must exist in the file)
  category      Category column; when absent from the file, reference-only
                tests are saved without categories
  description, units, gender, min_range, max_range,
  age_min, age_min_unit, age_max, age_max_unit
                Columns copied into each reference row of the report.
                Columns missing from the file read as empty.

Example:
{{
  "name": "Branch catalog",
  "encodings": ["utf-8", "cp1252"],
  "price": {{
    "test_name": "Test",
    "price": "Rate",
    "category": "Department"
  }},
  "reference": {{
    "test_name": "Test",
    "category": "Department",
    "description": "Description",
    "units": "Unit",
    "gender": "Sex",
    "min_range": "Low",
    "max_range": "High",
    "age_min": "Age From",
    "age_min_unit": "Age From Unit",
    "age_max": "Age To",
    "age_max_unit": "Age To Unit"
  }}
}}

Every column name must be non-empty and mapped at most once per side.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), LabrefError> {
    let layout = labref_core::layout::load_layout(file)?;

    println!("Layout '{}' is valid.", layout.name);
    println!(
        "  Encodings: {}",
        layout
            .encodings
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  Price name column: '{}', reference name column: '{}'",
        layout.price.test_name, layout.reference.test_name
    );

    Ok(())
}
