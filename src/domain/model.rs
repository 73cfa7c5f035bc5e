use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job-role category inferred from title, description and source URL.
///
/// Computed once per analysis and stored on the result, never mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    #[default]
    General,
    Swe,
    PmMarketing,
    Design,
    HybridDesignSwe,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Domain::General => "general",
            Domain::Swe => "swe",
            Domain::PmMarketing => "pm_marketing",
            Domain::Design => "design",
            Domain::HybridDesignSwe => "hybrid_design_swe",
        };
        f.write_str(name)
    }
}

/// Raw keyword lists as shipped in the catalog JSON.
///
/// Keys follow the catalog file's camelCase naming; absent keys
/// deserialize to empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogData {
    pub tech_keywords: Vec<String>,
    pub soft_keywords: Vec<String>,
    pub swe_keywords: Vec<String>,
    pub pm_marketing_keywords: Vec<String>,
    pub design_keywords: Vec<String>,
}

impl CatalogData {
    pub fn is_empty(&self) -> bool {
        self.tech_keywords.is_empty()
            && self.soft_keywords.is_empty()
            && self.swe_keywords.is_empty()
            && self.pm_marketing_keywords.is_empty()
            && self.design_keywords.is_empty()
    }
}

/// Optional metadata about the job posting being analyzed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMetadata {
    pub title: String,
    pub company: String,
    pub date: String,
    pub source_url: String,
}

/// Outcome of comparing a resume against a job description.
///
/// `matched_keywords` and `unmatched_keywords` hold the literal substrings
/// as they appeared in the job text, in first-occurrence order. Invariants:
/// `matched_count + unmatched_keywords.len() == total_keywords` and
/// `score == round(matched_count / total_keywords * 100)` (0 when empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub matched_keywords: Vec<String>,
    pub unmatched_keywords: Vec<String>,
    pub total_keywords: usize,
    pub matched_count: usize,
    pub domain: Domain,
    pub matched_tech: Vec<String>,
    pub matched_soft: Vec<String>,
    pub unmatched_tech: Vec<String>,
    pub unmatched_soft: Vec<String>,
}

impl MatchResult {
    /// Zero-valued result used when the job text yields no keywords.
    pub fn empty(domain: Domain) -> Self {
        Self {
            score: 0,
            matched_keywords: Vec::new(),
            unmatched_keywords: Vec::new(),
            total_keywords: 0,
            matched_count: 0,
            domain,
            matched_tech: Vec::new(),
            matched_soft: Vec::new(),
            unmatched_tech: Vec::new(),
            unmatched_soft: Vec::new(),
        }
    }
}

/// Full analysis output handed to callers: the score plus the metadata it
/// was computed from and an optional highlighted rendering of the job text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: MatchResult,
    pub metadata: JobMetadata,
    pub analyzed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_job: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_serde_names() {
        assert_eq!(
            serde_json::to_string(&Domain::HybridDesignSwe).unwrap(),
            "\"hybrid_design_swe\""
        );
        assert_eq!(
            serde_json::to_string(&Domain::PmMarketing).unwrap(),
            "\"pm_marketing\""
        );
        let back: Domain = serde_json::from_str("\"design\"").unwrap();
        assert_eq!(back, Domain::Design);
    }

    #[test]
    fn test_catalog_data_camel_case_keys() {
        let json = r#"{"techKeywords": ["React"], "softKeywords": ["Teamwork"]}"#;
        let data: CatalogData = serde_json::from_str(json).unwrap();
        assert_eq!(data.tech_keywords, vec!["React"]);
        assert_eq!(data.soft_keywords, vec!["Teamwork"]);
        // Absent keys default to empty lists.
        assert!(data.swe_keywords.is_empty());
        assert!(data.design_keywords.is_empty());
    }

    #[test]
    fn test_empty_result_invariants() {
        let r = MatchResult::empty(Domain::General);
        assert_eq!(r.score, 0);
        assert_eq!(r.total_keywords, 0);
        assert_eq!(
            r.matched_count + r.unmatched_keywords.len(),
            r.total_keywords
        );
    }
}
