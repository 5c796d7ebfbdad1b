// Property-based tests for name reconciliation.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::BTreeSet;

use labref_core::model::{NamePolicy, Price, PriceEntry, ReferenceEntry};
use labref_core::reconcile::{diff_names, match_all, NameDiff};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Presence of one base name on one side: absent, lower-case, upper-case
/// or both spellings.
#[derive(Debug, Clone, Copy)]
enum Variant {
    Absent,
    Lower,
    Upper,
    Both,
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Absent), Just(Variant::Lower), Just(Variant::Upper)]
}

fn variant_or_both() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Absent),
        Just(Variant::Lower),
        Just(Variant::Upper),
        Just(Variant::Both),
    ]
}

fn render(base: &str, v: Variant) -> Vec<String> {
    match v {
        Variant::Absent => vec![],
        Variant::Lower => vec![base.to_string()],
        Variant::Upper => vec![base.to_uppercase()],
        Variant::Both => vec![base.to_string(), base.to_uppercase()],
    }
}

/// Distinct lower-case bases rendered on each side with a variant drawn
/// from `variants`.
fn sides_with<S>(variants: fn() -> S) -> impl Strategy<Value = (Vec<String>, Vec<String>)>
where
    S: Strategy<Value = Variant> + 'static,
{
    prop::collection::btree_set("[a-z]{1,6}", 0..20).prop_flat_map(move |bases| {
        let bases: Vec<String> = bases.into_iter().collect();
        let n = bases.len();
        (
            Just(bases),
            prop::collection::vec(variants(), n),
            prop::collection::vec(variants(), n),
        )
            .prop_map(|(bases, left, right)| {
                let price: Vec<String> = bases
                    .iter()
                    .zip(&left)
                    .flat_map(|(b, v)| render(b, *v))
                    .collect();
                let reference: Vec<String> = bases
                    .iter()
                    .zip(&right)
                    .flat_map(|(b, v)| render(b, *v))
                    .collect();
                (price, reference)
            })
    })
}

/// Each side holds at most one spelling of a name.
fn sides() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    sides_with(variant)
}

/// A side may hold a name in both lower and upper case.
fn sides_with_duplicates() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    sides_with(variant_or_both)
}

/// How many buckets of `diff` hold `name`, on either side of a case mismatch.
fn bucket_count(diff: &NameDiff, name: &str) -> usize {
    [
        diff.exact_matches.contains(name),
        diff.case_mismatches.contains_key(name)
            || diff.case_mismatches.values().any(|v| v == name),
        diff.price_only.contains(name),
        diff.reference_only.contains(name),
    ]
    .iter()
    .filter(|held| **held)
    .count()
}

fn price_entry(name: &str) -> PriceEntry {
    PriceEntry {
        test_name: name.to_string(),
        price: Price::new("100"),
        category: String::new(),
    }
}

fn reference_entry(name: &str) -> ReferenceEntry {
    ReferenceEntry {
        test_name: name.to_string(),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_name_lands_in_exactly_one_bucket((price, reference) in sides_with_duplicates()) {
        let diff = diff_names(
            price.iter().map(String::as_str),
            reference.iter().map(String::as_str),
            NamePolicy::CaseInsensitive,
        );
        let all: BTreeSet<&String> = price.iter().chain(reference.iter()).collect();
        for name in all {
            prop_assert_eq!(bucket_count(&diff, name), 1, "name {:?} in {:?}", name, diff);
        }
    }

    #[test]
    fn diff_is_idempotent((price, reference) in sides_with_duplicates()) {
        let run = || diff_names(
            price.iter().map(String::as_str),
            reference.iter().map(String::as_str),
            NamePolicy::CaseInsensitive,
        );
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn exact_match_never_also_case_mismatch((price, reference) in sides_with_duplicates()) {
        let diff = diff_names(
            price.iter().map(String::as_str),
            reference.iter().map(String::as_str),
            NamePolicy::CaseInsensitive,
        );
        for name in &diff.exact_matches {
            let lower = name.to_lowercase();
            let mismatched = diff
                .case_mismatches
                .iter()
                .any(|(p, r)| p.to_lowercase() == lower || r.to_lowercase() == lower);
            prop_assert!(!mismatched, "{:?} in {:?}", name, diff);
        }
    }

    #[test]
    fn expansion_covers_each_priced_name_once((price, reference) in sides()) {
        let prices: Vec<PriceEntry> = price.iter().map(|n| price_entry(n)).collect();
        let refs: Vec<ReferenceEntry> = reference.iter().map(|n| reference_entry(n)).collect();
        let expansion = match_all(&prices, &refs);

        prop_assert_eq!(expansion.priced_count(), price.len());
        for name in &price {
            let in_matched = expansion.matched.contains_key(name);
            let in_unmatched = expansion.unmatched.contains_key(name);
            prop_assert!(in_matched ^ in_unmatched);
            let has_reference = reference.iter().any(|r| r.eq_ignore_ascii_case(name));
            prop_assert_eq!(in_matched, has_reference);
        }
    }

    #[test]
    fn expansion_agrees_with_diff((price, reference) in sides()) {
        let prices: Vec<PriceEntry> = price.iter().map(|n| price_entry(n)).collect();
        let refs: Vec<ReferenceEntry> = reference.iter().map(|n| reference_entry(n)).collect();
        let expansion = match_all(&prices, &refs);
        let diff = diff_names(
            price.iter().map(String::as_str),
            reference.iter().map(String::as_str),
            NamePolicy::CaseInsensitive,
        );

        // unmatched in the expansion is exactly the price-only bucket
        let unmatched: BTreeSet<String> = expansion.unmatched.keys().cloned().collect();
        prop_assert_eq!(unmatched, diff.price_only);
    }
}
