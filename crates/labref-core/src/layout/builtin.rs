use crate::error::LabrefError;
use crate::layout::schema::LayoutDef;

const TIAMED_JSON: &str = include_str!("../../../../layouts/tiamed.json");

/// Available predefined layouts. The first one is the default.
pub const PRESETS: &[&str] = &["tiamed"];

pub const DEFAULT_PRESET: &str = "tiamed";

/// Load a predefined layout by name.
pub fn load_preset(name: &str) -> Result<LayoutDef, LabrefError> {
    match name {
        "tiamed" => {
            let layout: LayoutDef = serde_json::from_str(TIAMED_JSON)?;
            Ok(layout)
        }
        _ => Err(LabrefError::LayoutInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
