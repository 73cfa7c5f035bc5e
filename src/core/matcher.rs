//! Domain-aware keyword extraction.
//!
//! Returns the literal matched substrings (display case preserved) for every
//! distinct catalog keyword present in a text.

use std::collections::HashSet;

use regex::Regex;

use crate::core::catalog::{Catalog, KeywordPatterns};
use crate::domain::model::Domain;

/// SWE keywords matching this are also relevant to design roles.
const FRONTEND_MARKER: &str = r"(?i)html|css|javascript|js|react|typescript|frontend|vue|angular|sass|less|tailwind|bootstrap|webpack";

/// Extracts every catalog keyword present in `text` for the given domain.
///
/// Candidates are attempted longest-first so multi-word phrases win over
/// single-word substrings they contain; the returned list is ordered by the
/// position of each keyword's first occurrence in `text`.
pub fn extract_keywords(catalog: &Catalog, text: &str, domain: Domain) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut candidates = candidate_keywords(catalog, domain);
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut found: Vec<(usize, String)> = Vec::new();
    let mut found_lower: HashSet<String> = HashSet::new();

    for keyword in candidates {
        let keyword_lower = keyword.to_lowercase();
        if found_lower.contains(&keyword_lower) {
            continue;
        }
        let Some(patterns) = catalog.patterns_for(keyword) else {
            // Entry was dropped at catalog build time (bad pattern).
            continue;
        };
        if let Some((start, literal)) = first_match(patterns, text) {
            found.push((start, literal));
            found_lower.insert(keyword_lower);
        }
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, literal)| literal).collect()
}

/// Tries the compiled patterns in sequence: exact form, singular retry for
/// plural keywords, then `ing`/`d`/`ed` suffix retries. First hit wins; the
/// captured source substring and its byte offset are returned.
fn first_match(patterns: &KeywordPatterns, text: &str) -> Option<(usize, String)> {
    if let Some(hit) = capture_literal(&patterns.exact, text) {
        return Some(hit);
    }
    if let Some(singular) = &patterns.singular {
        if let Some(hit) = capture_literal(singular, text) {
            return Some(hit);
        }
    }
    for suffixed in &patterns.suffixed {
        if let Some(hit) = capture_literal(suffixed, text) {
            return Some(hit);
        }
    }
    None
}

fn capture_literal(pattern: &Regex, text: &str) -> Option<(usize, String)> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str().to_string()))
}

/// Selects the catalog partition for a domain, always unioning the
/// soft-skills list in afterward and deduplicating case-insensitively.
fn candidate_keywords(catalog: &Catalog, domain: Domain) -> Vec<&String> {
    let data = catalog.data();
    let general = || -> Vec<&String> {
        data.tech_keywords
            .iter()
            .chain(data.soft_keywords.iter())
            .collect()
    };

    let mut list: Vec<&String> = match domain {
        Domain::Swe => {
            if data.swe_keywords.is_empty() {
                general()
            } else {
                data.swe_keywords.iter().collect()
            }
        }
        Domain::PmMarketing => {
            if data.pm_marketing_keywords.is_empty() {
                general()
            } else {
                data.pm_marketing_keywords.iter().collect()
            }
        }
        Domain::Design => {
            let frontend = Regex::new(FRONTEND_MARKER).unwrap();
            let mut list: Vec<&String> = data.design_keywords.iter().collect();
            list.extend(data.swe_keywords.iter().filter(|k| {
                let lower = k.to_lowercase();
                frontend.is_match(k) || lower.contains("frontend") || lower.contains("front-end")
            }));
            list
        }
        Domain::HybridDesignSwe => data
            .design_keywords
            .iter()
            .chain(data.swe_keywords.iter())
            .collect(),
        Domain::General => general(),
    };

    list.extend(data.soft_keywords.iter());

    let mut seen = HashSet::new();
    list.retain(|k| seen.insert(k.to_lowercase()));
    list
}
