pub mod diff;
pub mod expand;
pub mod layout;

use clap::Args;
use labref_core::error::LabrefError;
use labref_core::layout::builtin;
use labref_core::layout::schema::LayoutDef;
use std::path::PathBuf;

/// Input tables and how to read them.
#[derive(Args)]
pub struct InputArgs {
    /// Price list (CSV or spreadsheet)
    #[arg(long, value_name = "FILE", default_value = "tiamed_price_list.csv")]
    pub price: PathBuf,

    /// Reference-range table (CSV or spreadsheet)
    #[arg(
        long,
        value_name = "FILE",
        default_value = "tiamed_test_referance_point.csv"
    )]
    pub reference: PathBuf,

    /// Custom JSON layout file
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub layout: Option<PathBuf>,

    /// Predefined layout (default: tiamed)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,
}

impl InputArgs {
    /// Layout from `--layout`, else `--preset`, else the default preset.
    pub fn resolve_layout(&self) -> Result<LayoutDef, LabrefError> {
        match (&self.layout, &self.preset) {
            (Some(path), _) => labref_core::layout::load_layout(path),
            (None, Some(name)) => builtin::load_preset(name),
            (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET),
        }
    }

    pub fn is_json(&self) -> bool {
        self.output == "json"
    }
}
