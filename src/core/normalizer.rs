//! Comparison-only keyword normalization.
//!
//! Canonical forms produced here are used for set membership checks only,
//! never for display; callers keep the literal matched substrings around.

use crate::core::catalog::Catalog;

/// Reduces a list of keywords to lowercase canonical form.
///
/// Passes run in order: lowercase + dedup, synonym canonicalization,
/// prefix-family folding against the current working set, final dedup.
/// The prefix pass is intentionally order- and content-dependent: a variant
/// folds toward whichever stem entry happens to be present in the same
/// working set (see the contract note on [`fold_prefixes`]).
pub fn normalize_for_comparison(catalog: &Catalog, keywords: &[String]) -> Vec<String> {
    let mut working = dedup_preserving_order(keywords.iter().map(|k| k.to_lowercase()));

    for entry in working.iter_mut() {
        if let Some(canonical) = catalog.canonical_for(entry) {
            *entry = canonical.to_string();
        }
    }

    fold_prefixes(catalog, &mut working);

    dedup_preserving_order(working.into_iter())
}

/// Replaces each entry that extends a known stem with the first entry in the
/// working set equal to the stem or starting with `stem + " "`.
///
/// This runs after the synonym pass and can fold unrelated keywords that
/// merely share a stem; the behavior is kept for compatibility with the
/// documented normalization contract.
fn fold_prefixes(catalog: &Catalog, working: &mut Vec<String>) {
    for i in 0..working.len() {
        let entry = working[i].clone();
        for stem in catalog.prefix_stems() {
            if entry.starts_with(stem.as_str()) && entry.len() > stem.len() {
                let stem_phrase = format!("{} ", stem);
                let target = working
                    .iter()
                    .find(|other| *other == stem || other.starts_with(&stem_phrase))
                    .cloned();
                if let Some(target) = target {
                    working[i] = target;
                    break;
                }
            }
        }
    }
}

fn dedup_preserving_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}
