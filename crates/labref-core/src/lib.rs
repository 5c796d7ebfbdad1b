pub mod entries;
pub mod error;
pub mod layout;
pub mod model;
pub mod reconcile;
pub mod table;

use std::path::Path;

use error::LabrefError;
use layout::schema::LayoutDef;
use model::{PriceEntry, ReferenceEntry};
use reconcile::Reconciliation;

/// Both input tables, converted to entries.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub prices: Vec<PriceEntry>,
    pub references: Vec<ReferenceEntry>,
}

/// Load the price list and the reference table with the given layout.
///
/// Nothing is returned unless both tables load.
pub fn load_inputs(
    price_path: &Path,
    reference_path: &Path,
    layout: &LayoutDef,
) -> Result<Inputs, LabrefError> {
    let prices = entries::load_price_list(price_path, layout)?;
    let references = entries::load_reference_table(reference_path, layout)?;
    log::info!(
        "{} priced test(s), {} reference row(s)",
        prices.len(),
        references.len()
    );
    Ok(Inputs { prices, references })
}

/// Main API entry point: load both tables and reconcile them.
pub fn reconcile_files(
    price_path: &Path,
    reference_path: &Path,
    layout: &LayoutDef,
) -> Result<Reconciliation, LabrefError> {
    let inputs = load_inputs(price_path, reference_path, layout)?;
    Ok(reconcile::reconcile(&inputs.prices, &inputs.references))
}
