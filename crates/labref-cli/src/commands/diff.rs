use labref_core::error::LabrefError;
use labref_core::model::NamePolicy;
use labref_core::reconcile::{self, CategorizedName, NameDiff};
use serde::Serialize;
use std::path::Path;

use super::InputArgs;
use crate::output;

/// JSON shape of `labref diff -o json`.
#[derive(Serialize)]
struct DiffOutput<'a> {
    #[serde(flatten)]
    names: &'a NameDiff,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_only_categories: Option<&'a [CategorizedName]>,
}

pub fn run(input: &InputArgs, out_dir: &Path, exact: bool) -> Result<(), LabrefError> {
    let layout = input.resolve_layout()?;
    let policy = if exact {
        NamePolicy::Exact
    } else {
        NamePolicy::CaseInsensitive
    };

    let inputs = labref_core::load_inputs(&input.price, &input.reference, &layout)?;
    let names = reconcile::diff_entries(&inputs.prices, &inputs.references, policy);

    let categories = match policy {
        NamePolicy::Exact => None,
        NamePolicy::CaseInsensitive => {
            reconcile::annotate_categories(&names.reference_only, &inputs.references)
        }
    };

    let written = match policy {
        NamePolicy::Exact => output::artifacts::write_exact_diff(out_dir, &names, &layout)?,
        NamePolicy::CaseInsensitive => {
            output::artifacts::write_name_diff(out_dir, &names, categories.as_deref())?
        }
    };

    if input.is_json() {
        output::json::print(&DiffOutput {
            names: &names,
            reference_only_categories: categories.as_deref(),
        })?;
    } else {
        output::table::print_diff(&names, categories.is_some(), &written);
    }

    Ok(())
}
