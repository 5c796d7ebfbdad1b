use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::model::{NamePolicy, ReferenceEntry};
use crate::reconcile::outcome::{CategorizedName, NameDiff};

/// Compare the distinct trimmed names of both sides.
///
/// Exact matches are case-sensitive. Under `NamePolicy::CaseInsensitive`,
/// names equal except for case are reported as case mismatches and removed
/// from the one-sided buckets; under `NamePolicy::Exact` they stay one-sided.
///
/// When several names on one side fold to the same lower-case key, one
/// represents that key: a spelling that matches the other side exactly if
/// there is one, otherwise the lexicographically greatest. A key with an
/// exact match never yields a case mismatch, and its other spellings stay
/// one-sided.
pub fn diff_names<'a, P, R>(price_names: P, reference_names: R, policy: NamePolicy) -> NameDiff
where
    P: IntoIterator<Item = &'a str>,
    R: IntoIterator<Item = &'a str>,
{
    let price = distinct(price_names);
    let reference = distinct(reference_names);

    let exact_matches: BTreeSet<String> = price.intersection(&reference).cloned().collect();

    let mut case_mismatches = BTreeMap::new();
    if policy == NamePolicy::CaseInsensitive {
        let lower_price = fold_case(&price, &exact_matches);
        let lower_reference = fold_case(&reference, &exact_matches);
        for (lower, price_name) in &lower_price {
            if let Some(reference_name) = lower_reference.get(lower) {
                if price_name != reference_name {
                    case_mismatches.insert((*price_name).clone(), (*reference_name).clone());
                }
            }
        }
    }

    let price_only = price
        .difference(&reference)
        .filter(|name| !case_mismatches.contains_key(*name))
        .cloned()
        .collect();

    let mismatched_reference: BTreeSet<&String> = case_mismatches.values().collect();
    let reference_only = reference
        .difference(&price)
        .filter(|name| !mismatched_reference.contains(name))
        .cloned()
        .collect();

    NameDiff {
        policy,
        exact_matches,
        case_mismatches,
        price_only,
        reference_only,
    }
}

fn distinct<'a>(names: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Lower-case key -> original name. Later names overwrite earlier ones, and
/// the `exact` spellings are written last.
fn fold_case<'n>(
    names: &'n BTreeSet<String>,
    exact: &'n BTreeSet<String>,
) -> BTreeMap<String, &'n String> {
    names
        .iter()
        .filter(|name| !exact.contains(*name))
        .chain(exact.iter())
        .map(|name| (name.to_lowercase(), name))
        .collect()
}

/// Attach to each reference-only name the category of the first reference
/// row with that name.
///
/// Returns `None` when no reference row carries a category column.
pub fn annotate_categories(
    reference_only: &BTreeSet<String>,
    references: &[ReferenceEntry],
) -> Option<Vec<CategorizedName>> {
    if !references.iter().any(|r| r.category.is_some()) {
        return None;
    }

    let mut first_category: HashMap<&str, &str> = HashMap::new();
    for reference in references {
        first_category
            .entry(reference.test_name.trim())
            .or_insert_with(|| reference.category.as_deref().unwrap_or(""));
    }

    Some(
        reference_only
            .iter()
            .map(|name| CategorizedName {
                category: first_category
                    .get(name.as_str())
                    .copied()
                    .unwrap_or("")
                    .to_string(),
                test_name: name.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diff(price: &[&str], reference: &[&str]) -> NameDiff {
        diff_names(
            price.iter().copied(),
            reference.iter().copied(),
            NamePolicy::CaseInsensitive,
        )
    }

    #[test]
    fn exact_and_one_sided() {
        let d = diff(&["CBC", "Vitamin D"], &["CBC", "Ferritin"]);
        assert_eq!(d.exact_matches, BTreeSet::from(["CBC".to_string()]));
        assert_eq!(d.price_only, BTreeSet::from(["Vitamin D".to_string()]));
        assert_eq!(d.reference_only, BTreeSet::from(["Ferritin".to_string()]));
        assert!(d.case_mismatches.is_empty());
    }

    #[test]
    fn case_mismatch_is_its_own_bucket() {
        let d = diff(&["hba1c"], &["HbA1c"]);
        assert_eq!(d.case_mismatches.get("hba1c").map(String::as_str), Some("HbA1c"));
        assert!(d.exact_matches.is_empty());
        assert!(d.price_only.is_empty());
        assert!(d.reference_only.is_empty());
    }

    #[test]
    fn names_are_trimmed_and_deduplicated() {
        let d = diff(&[" CBC", "CBC ", ""], &["CBC"]);
        assert_eq!(d.exact_matches.len(), 1);
        assert!(d.price_only.is_empty());
    }

    #[test]
    fn exact_policy_skips_case_detection() {
        let d = diff_names(["hba1c"], ["HbA1c"], NamePolicy::Exact);
        assert!(d.case_mismatches.is_empty());
        assert_eq!(d.price_only, BTreeSet::from(["hba1c".to_string()]));
        assert_eq!(d.reference_only, BTreeSet::from(["HbA1c".to_string()]));
    }

    #[test]
    fn folded_duplicates_keep_greatest_name() {
        // "TSH" < "Tsh" < "tsh" in byte order
        let d = diff(&["TSH", "tsh"], &["Tsh"]);
        assert_eq!(d.case_mismatches.get("tsh").map(String::as_str), Some("Tsh"));
        assert_eq!(d.price_only, BTreeSet::from(["TSH".to_string()]));
    }

    #[test]
    fn exact_spelling_represents_its_key() {
        let d = diff(&["TSH", "tsh"], &["TSH"]);
        assert_eq!(d.exact_matches, BTreeSet::from(["TSH".to_string()]));
        assert!(d.case_mismatches.is_empty());
        assert_eq!(d.price_only, BTreeSet::from(["tsh".to_string()]));
        assert!(d.reference_only.is_empty());
    }

    #[test]
    fn exact_spelling_wins_on_both_sides() {
        let d = diff(&["TSH", "Tsh"], &["TSH", "tsh"]);
        assert_eq!(d.exact_matches, BTreeSet::from(["TSH".to_string()]));
        assert!(d.case_mismatches.is_empty());
        assert_eq!(d.price_only, BTreeSet::from(["Tsh".to_string()]));
        assert_eq!(d.reference_only, BTreeSet::from(["tsh".to_string()]));
    }

    #[test]
    fn idempotent() {
        let a = diff(&["CBC", "hba1c", "Lipid"], &["cbc", "HbA1c", "TSH"]);
        let b = diff(&["CBC", "hba1c", "Lipid"], &["cbc", "HbA1c", "TSH"]);
        assert_eq!(a, b);
    }

    #[test]
    fn categories_from_first_reference_row() {
        let refs = vec![
            ReferenceEntry {
                category: Some("Hormones".into()),
                test_name: "TSH".into(),
                ..Default::default()
            },
            ReferenceEntry {
                category: Some("Thyroid".into()),
                test_name: "TSH".into(),
                ..Default::default()
            },
        ];
        let only = BTreeSet::from(["TSH".to_string()]);
        let annotated = annotate_categories(&only, &refs).unwrap();
        assert_eq!(
            annotated,
            vec![CategorizedName {
                category: "Hormones".into(),
                test_name: "TSH".into()
            }]
        );
    }

    #[test]
    fn no_category_column_means_no_annotation() {
        let refs = vec![ReferenceEntry {
            test_name: "TSH".into(),
            ..Default::default()
        }];
        let only = BTreeSet::from(["TSH".to_string()]);
        assert!(annotate_categories(&only, &refs).is_none());
    }
}
