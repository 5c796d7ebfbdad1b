use crate::model::{NamePolicy, Price, ReferenceEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Message attached to every priced test without reference ranges.
pub const NO_REFERENCE_MESSAGE: &str = "No reference ranges found";

/// A priced test together with every reference row carrying its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedTest {
    #[serde(rename = "Price")]
    pub price: Price,
    #[serde(rename = "Category")]
    pub category: String,
    /// Matching reference rows in reference-table order.
    #[serde(rename = "References")]
    pub references: Vec<ReferenceEntry>,
}

/// A priced test with no reference rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedTest {
    #[serde(rename = "Price")]
    pub price: Price,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Message")]
    pub message: String,
}

/// Priced tests keyed by name, in price-list order.
///
/// Inserting a name again replaces its value in place: the first row fixes
/// the position, the last row supplies the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedTests<T> {
    entries: Vec<(String, T)>,
    positions: HashMap<String, usize>,
}

impl<T> Default for PricedTests<T> {
    fn default() -> Self {
        PricedTests {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> PricedTests<T> {
    pub fn insert(&mut self, name: String, value: T) {
        match self.positions.get(&name) {
            Some(&idx) => self.entries[idx].1 = value,
            None => {
                self.positions.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.positions.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<T: Serialize> Serialize for PricedTests<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Result of expanding each priced test to its reference rows.
///
/// Keys are the trimmed price-side names, in price-list order. Every priced
/// name is in exactly one of the two maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceExpansion {
    #[serde(rename = "tests_with_references")]
    pub matched: PricedTests<MatchedTest>,
    #[serde(rename = "tests_without_references")]
    pub unmatched: PricedTests<UnmatchedTest>,
}

impl ReferenceExpansion {
    pub fn priced_count(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// Number of reference rows attached across all matched tests.
    pub fn reference_row_count(&self) -> usize {
        self.matched.values().map(|m| m.references.len()).sum()
    }

    /// Sum of the numeric prices of tests without reference ranges, or
    /// `None` when none of them has a numeric price.
    pub fn unmatched_price_total(&self) -> Option<Decimal> {
        let amounts: Vec<Decimal> = self
            .unmatched
            .values()
            .filter_map(|u| u.price.amount())
            .collect();
        if amounts.is_empty() {
            None
        } else {
            Some(amounts.into_iter().sum())
        }
    }
}

/// Set-level comparison of price-side and reference-side test names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDiff {
    pub policy: NamePolicy,
    /// Names present on both sides with identical casing.
    pub exact_matches: BTreeSet<String>,
    /// Price-side name -> reference-side name, for names equal except for case.
    pub case_mismatches: BTreeMap<String, String>,
    pub price_only: BTreeSet<String>,
    pub reference_only: BTreeSet<String>,
}

/// A reference-only test name with the category of its first reference row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedName {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Test Name")]
    pub test_name: String,
}

/// Everything one reconciliation run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    pub expansion: ReferenceExpansion,
    pub names: NameDiff,
    /// `reference_only` annotated with categories, when the reference table has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_only_categories: Option<Vec<CategorizedName>>,
}
