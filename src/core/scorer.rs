//! Resume-vs-job comparison and score computation.

use std::collections::HashSet;

use crate::core::catalog::Catalog;
use crate::core::matcher::extract_keywords;
use crate::core::normalizer::normalize_for_comparison;
use crate::domain::model::{Domain, MatchResult};
use crate::utils::error::{MatchError, Result};

/// Upstream file parsing failed if raw PDF bytes leaked through.
const BINARY_SENTINEL: &str = "%PDF";

/// Compares the keywords found in both texts and computes the match score.
///
/// Keyword comparison is canonical (lowercase, synonyms and prefix families
/// folded) while the reported lists keep the literal job-text substrings in
/// first-occurrence order. A result with `total_keywords == 0` and
/// `score == 0` is valid output for empty or keyword-free job text.
pub fn analyze(
    catalog: &Catalog,
    resume_text: &str,
    job_text: &str,
    domain: Domain,
) -> Result<MatchResult> {
    if resume_text.starts_with(BINARY_SENTINEL) {
        return Err(MatchError::BinaryContent);
    }

    let resume_literals = extract_keywords(catalog, resume_text, domain);
    let job_literals = extract_keywords(catalog, job_text, domain);

    tracing::debug!(
        "Extracted {} resume keywords, {} job keywords ({} domain)",
        resume_literals.len(),
        job_literals.len(),
        domain
    );

    let resume_canon: HashSet<String> = normalize_for_comparison(catalog, &resume_literals)
        .into_iter()
        .collect();

    let mut matched_keywords = Vec::new();
    let mut unmatched_keywords = Vec::new();
    let mut recorded_canon: HashSet<String> = HashSet::new();

    for literal in &job_literals {
        let canonical = normalize_for_comparison(catalog, std::slice::from_ref(literal))
            .into_iter()
            .next()
            .unwrap_or_else(|| literal.to_lowercase());

        if !recorded_canon.insert(canonical.clone()) {
            continue;
        }

        if resume_canon.contains(&canonical) {
            matched_keywords.push(literal.clone());
        } else {
            unmatched_keywords.push(literal.clone());
        }
    }

    let matched_count = matched_keywords.len();
    let total_keywords = matched_count + unmatched_keywords.len();
    let score = if total_keywords > 0 {
        (matched_count as f64 / total_keywords as f64 * 100.0).round() as u8
    } else {
        0
    };

    // Soft/technical partition, for analytics only.
    let split = |keywords: &[String]| -> (Vec<String>, Vec<String>) {
        keywords
            .iter()
            .cloned()
            .partition(|k| !catalog.is_soft_skill(k))
    };
    let (matched_tech, matched_soft) = split(&matched_keywords);
    let (unmatched_tech, unmatched_soft) = split(&unmatched_keywords);

    Ok(MatchResult {
        score,
        matched_keywords,
        unmatched_keywords,
        total_keywords,
        matched_count,
        domain,
        matched_tech,
        matched_soft,
        unmatched_tech,
        unmatched_soft,
    })
}
