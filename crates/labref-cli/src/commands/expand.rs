use labref_core::error::LabrefError;
use labref_core::reconcile;
use std::path::Path;

use super::InputArgs;
use crate::output;

pub fn run(input: &InputArgs, out_dir: &Path) -> Result<(), LabrefError> {
    let layout = input.resolve_layout()?;

    if !input.is_json() {
        println!(
            "Looking for files:\n- {}\n- {}",
            input.price.display(),
            input.reference.display()
        );
    }

    let inputs = labref_core::load_inputs(&input.price, &input.reference, &layout)?;
    let expansion = reconcile::match_all(&inputs.prices, &inputs.references);

    let written = output::artifacts::write_expansion(out_dir, &expansion)?;

    if input.is_json() {
        output::json::print(&expansion)?;
    } else {
        output::table::print_expansion(&expansion, &written);
    }

    Ok(())
}
