pub mod diff;
pub mod expand;
pub mod outcome;

pub use diff::{annotate_categories, diff_names};
pub use expand::match_all;
pub use outcome::{
    CategorizedName, MatchedTest, NameDiff, PricedTests, Reconciliation, ReferenceExpansion,
    UnmatchedTest, NO_REFERENCE_MESSAGE,
};

use crate::model::{NamePolicy, PriceEntry, ReferenceEntry};

/// Name-level comparison of two entry collections.
pub fn diff_entries(
    prices: &[PriceEntry],
    references: &[ReferenceEntry],
    policy: NamePolicy,
) -> NameDiff {
    diff_names(
        prices.iter().map(|p| p.test_name.as_str()),
        references.iter().map(|r| r.test_name.as_str()),
        policy,
    )
}

/// Run the one-to-many expansion and the case-insensitive name diff over
/// the same inputs.
pub fn reconcile(prices: &[PriceEntry], references: &[ReferenceEntry]) -> Reconciliation {
    let expansion = match_all(prices, references);
    let names = diff_entries(prices, references, NamePolicy::CaseInsensitive);
    let reference_only_categories = annotate_categories(&names.reference_only, references);

    Reconciliation {
        expansion,
        names,
        reference_only_categories,
    }
}
