use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Price cell as it appeared in the price list.
///
/// Price lists mix bare numbers, thousands separators and free text
/// ("on request"), so the raw text is what gets reported. `amount()` gives
/// the numeric value when there is one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn new(raw: impl Into<String>) -> Self {
        Price(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the exact decimal amount, or `None` for blank or non-numeric cells.
    pub fn amount(&self) -> Option<Decimal> {
        let cleaned: String = self
            .0
            .trim()
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        Decimal::from_str(&cleaned).ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How test names are folded into a matching key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// Trimmed, case preserved.
    Exact,
    /// Trimmed and lower-cased.
    #[default]
    CaseInsensitive,
}

impl NamePolicy {
    pub fn key(self, raw: &str) -> String {
        match self {
            NamePolicy::Exact => raw.trim().to_string(),
            NamePolicy::CaseInsensitive => raw.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for NamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePolicy::Exact => write!(f, "exact"),
            NamePolicy::CaseInsensitive => write!(f, "case-insensitive"),
        }
    }
}

/// One row of the price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Trimmed test name.
    pub test_name: String,
    pub price: Price,
    pub category: String,
}

/// One row of the reference-range table.
///
/// A test usually has several rows, one per gender/age band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    #[serde(rename = "Category", serialize_with = "none_as_empty")]
    pub category: Option<String>,
    #[serde(rename = "Test Name")]
    pub test_name: String,
    #[serde(rename = "Test Description")]
    pub description: String,
    #[serde(rename = "Units")]
    pub units: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Min Reference Range")]
    pub min_range: String,
    #[serde(rename = "Max Reference Range")]
    pub max_range: String,
    #[serde(rename = "Age Min")]
    pub age_min: String,
    #[serde(rename = "Min Age Unit")]
    pub age_min_unit: String,
    #[serde(rename = "Age Max")]
    pub age_max: String,
    #[serde(rename = "Max Age Unit")]
    pub age_max_unit: String,
}

fn none_as_empty<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
