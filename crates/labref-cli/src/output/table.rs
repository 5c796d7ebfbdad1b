use labref_core::model::NamePolicy;
use labref_core::reconcile::{NameDiff, ReferenceExpansion};
use std::path::PathBuf;

/// How many tests without references are listed in the summary.
const UNMATCHED_SAMPLE: usize = 5;

pub fn print_expansion(expansion: &ReferenceExpansion, written: &[PathBuf]) {
    println!("\n=== Summary ===");
    println!("Tests with references: {}", expansion.matched.len());
    println!("Tests without references: {}", expansion.unmatched.len());
    println!(
        "Reference rows attached: {}",
        expansion.reference_row_count()
    );
    if let Some(total) = expansion.unmatched_price_total() {
        println!("Priced value without references: {total}");
    }

    print_saved(written);

    if !expansion.unmatched.is_empty() {
        println!("\nSample of tests without references:");
        for (test_name, data) in expansion.unmatched.iter().take(UNMATCHED_SAMPLE) {
            println!(
                "- {} (Price: {}, Category: {})",
                test_name, data.price, data.category
            );
        }
        if expansion.unmatched.len() > UNMATCHED_SAMPLE {
            println!("... (more not shown)");
        }
    }
}

pub fn print_diff(names: &NameDiff, categorized: bool, written: &[PathBuf]) {
    match names.policy {
        NamePolicy::CaseInsensitive => {
            println!("\nExact matches (case-sensitive):");
            for test in &names.exact_matches {
                println!("- {test}");
            }

            println!("\nCase mismatches (same name but different case):");
            for (price_name, reference_name) in &names.case_mismatches {
                println!("- Price list: '{price_name}' \u{2260} Reference: '{reference_name}'");
            }

            println!("\nTests present only in price list:");
            for test in &names.price_only {
                println!("- {test}");
            }

            println!("\nTests present only in reference:");
            for test in &names.reference_only {
                println!("- {test}");
            }
        }
        NamePolicy::Exact => {
            println!("\nTests present in price list but not in reference:");
            for test in &names.price_only {
                println!("- {test}");
            }

            println!("\nTests present in reference but not in price list:");
            for test in &names.reference_only {
                println!("- {test}");
            }
        }
    }

    print_saved(written);
    if names.policy == NamePolicy::CaseInsensitive && categorized {
        println!("  (reference-only tests saved with Category first)");
    }
}

fn print_saved(written: &[PathBuf]) {
    if written.is_empty() {
        println!("\nNothing to save.");
        return;
    }
    println!("\nResults saved to:");
    for path in written {
        println!("- {}", path.display());
    }
}

/// Troubleshooting hints shown after a table fails to load.
pub fn print_suggestions() {
    eprintln!("\nPossible solutions:");
    eprintln!("1. Check that both files exist at the given paths (see --price and --reference)");
    eprintln!("2. Verify the column names match the layout (run `labref layout show tiamed`)");
    eprintln!("3. Open the files in a text editor to check their encoding");
    eprintln!("4. If you know the correct encoding, add it to a custom layout's \"encodings\" list");
}
