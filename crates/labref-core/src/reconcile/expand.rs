use std::collections::HashMap;

use crate::model::{NamePolicy, PriceEntry, ReferenceEntry};
use crate::reconcile::outcome::{
    MatchedTest, ReferenceExpansion, UnmatchedTest, NO_REFERENCE_MESSAGE,
};

/// Attach to each priced test every reference row with the same name,
/// compared case-insensitively after trimming.
///
/// Entries with a blank name are skipped. When a name is priced more than
/// once, the later row's price and category win.
pub fn match_all(prices: &[PriceEntry], references: &[ReferenceEntry]) -> ReferenceExpansion {
    let policy = NamePolicy::CaseInsensitive;

    let mut index: HashMap<String, Vec<&ReferenceEntry>> = HashMap::new();
    for reference in references {
        let key = policy.key(&reference.test_name);
        if key.is_empty() {
            continue;
        }
        index.entry(key).or_default().push(reference);
    }

    let mut expansion = ReferenceExpansion::default();
    for entry in prices {
        let name = entry.test_name.trim();
        if name.is_empty() {
            continue;
        }

        match index.get(&policy.key(name)) {
            Some(rows) => {
                expansion.matched.insert(
                    name.to_string(),
                    MatchedTest {
                        price: entry.price.clone(),
                        category: entry.category.clone(),
                        references: rows.iter().map(|r| (*r).clone()).collect(),
                    },
                );
            }
            None => {
                expansion.unmatched.insert(
                    name.to_string(),
                    UnmatchedTest {
                        price: entry.price.clone(),
                        category: entry.category.clone(),
                        message: NO_REFERENCE_MESSAGE.to_string(),
                    },
                );
            }
        }
    }

    log::debug!(
        "expanded {} priced test(s): {} with references, {} without",
        expansion.priced_count(),
        expansion.matched.len(),
        expansion.unmatched.len()
    );
    expansion
}
