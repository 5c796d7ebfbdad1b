use serde::{Deserialize, Serialize};

use crate::table::{Encoding, DEFAULT_ENCODINGS};

/// Column names and decoding options for a pair of price/reference tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Encodings tried in order when reading CSV input.
    #[serde(default = "default_encodings")]
    pub encodings: Vec<Encoding>,
    pub price: PriceColumns,
    pub reference: ReferenceColumns,
}

fn default_encodings() -> Vec<Encoding> {
    DEFAULT_ENCODINGS.to_vec()
}

/// Column names in the price list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceColumns {
    pub test_name: String,
    pub price: String,
    pub category: String,
}

/// Column names in the reference-range table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceColumns {
    pub test_name: String,
    pub category: String,
    pub description: String,
    pub units: String,
    pub gender: String,
    pub min_range: String,
    pub max_range: String,
    pub age_min: String,
    pub age_min_unit: String,
    pub age_max: String,
    pub age_max_unit: String,
}

impl PriceColumns {
    pub fn all(&self) -> [(&'static str, &str); 3] {
        [
            ("test_name", self.test_name.as_str()),
            ("price", self.price.as_str()),
            ("category", self.category.as_str()),
        ]
    }
}

impl ReferenceColumns {
    pub fn all(&self) -> [(&'static str, &str); 11] {
        [
            ("test_name", self.test_name.as_str()),
            ("category", self.category.as_str()),
            ("description", self.description.as_str()),
            ("units", self.units.as_str()),
            ("gender", self.gender.as_str()),
            ("min_range", self.min_range.as_str()),
            ("max_range", self.max_range.as_str()),
            ("age_min", self.age_min.as_str()),
            ("age_min_unit", self.age_min_unit.as_str()),
            ("age_max", self.age_max.as_str()),
            ("age_max_unit", self.age_max_unit.as_str()),
        ]
    }
}
