//! Analysis engine: ties classification, scoring and highlighting together.

use chrono::Utc;

use crate::core::catalog::Catalog;
use crate::core::classifier::DomainClassifier;
use crate::core::{highlighter, scorer};
use crate::domain::model::{AnalysisReport, JobMetadata};
use crate::utils::error::Result;

/// Job descriptions shorter than this are analyzed anyway, with a warning;
/// truncated postings produce misleading scores.
pub const MIN_JOB_LENGTH: usize = 50;

/// One catalog, many analyses. The engine borrows nothing per call and can
/// be shared behind an `Arc` by concurrent callers.
pub struct MatchEngine {
    catalog: Catalog,
    classifier: DomainClassifier,
    min_job_length: usize,
    include_highlight: bool,
}

impl MatchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            classifier: DomainClassifier::new(),
            min_job_length: MIN_JOB_LENGTH,
            include_highlight: false,
        }
    }

    pub fn with_highlight(mut self, include: bool) -> Self {
        self.include_highlight = include;
        self
    }

    pub fn with_min_job_length(mut self, min: usize) -> Self {
        self.min_job_length = min;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs a full analysis: domain detection, keyword comparison, and
    /// (optionally) a highlighted rendering of the job text.
    pub fn analyze_job(
        &self,
        resume_text: &str,
        job_text: &str,
        metadata: &JobMetadata,
    ) -> Result<AnalysisReport> {
        let domain = self
            .classifier
            .detect(&metadata.title, job_text, &metadata.source_url);

        tracing::info!("Analyzing job \"{}\" as {} role", metadata.title, domain);

        if job_text.trim().len() < self.min_job_length {
            tracing::warn!(
                "Job description is only {} characters; the score may not be meaningful",
                job_text.trim().len()
            );
        }
        if self.catalog.is_degraded() {
            tracing::warn!("Running with the fallback catalog; domain-specific matching is off");
        }

        let result = scorer::analyze(&self.catalog, resume_text, job_text, domain)?;

        tracing::info!(
            "Matched {}/{} keywords (score {})",
            result.matched_count,
            result.total_keywords,
            result.score
        );

        let highlighted_job = if self.include_highlight {
            Some(highlighter::highlight(
                job_text,
                &result.matched_keywords,
                &result.unmatched_keywords,
            ))
        } else {
            None
        };

        Ok(AnalysisReport {
            result,
            metadata: metadata.clone(),
            analyzed_at: Utc::now(),
            highlighted_job,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Domain;

    fn metadata(title: &str) -> JobMetadata {
        JobMetadata {
            title: title.to_string(),
            company: "Acme".to_string(),
            date: "2025-06-01".to_string(),
            source_url: String::new(),
        }
    }

    #[test]
    fn test_domain_flows_into_result() {
        let engine = MatchEngine::new(Catalog::builtin());
        let report = engine
            .analyze_job(
                "Python React",
                "Software engineer role working with Python, React and Kubernetes",
                &metadata("Senior Software Engineer"),
            )
            .unwrap();
        assert_eq!(report.result.domain, Domain::Swe);
        assert!(report.highlighted_job.is_none());
    }

    #[test]
    fn test_highlight_included_when_enabled() {
        let engine = MatchEngine::new(Catalog::builtin()).with_highlight(true);
        let report = engine
            .analyze_job(
                "Python",
                "A role needing Python and Docker, fifty chars at least here",
                &metadata("Backend Developer"),
            )
            .unwrap();
        let html = report.highlighted_job.unwrap();
        assert!(html.contains("keyword-highlight matched"));
        assert!(html.contains("keyword-highlight unmatched"));
    }

    #[test]
    fn test_short_job_text_still_analyzed() {
        let engine = MatchEngine::new(Catalog::builtin());
        let report = engine
            .analyze_job("Python", "Python", &metadata("Engineer"))
            .unwrap();
        assert_eq!(report.result.total_keywords, 1);
        assert_eq!(report.result.score, 100);
    }

    #[test]
    fn test_binary_resume_propagates_error() {
        let engine = MatchEngine::new(Catalog::builtin());
        let err = engine
            .analyze_job("%PDF-1.7 ...", "Python role", &metadata("Engineer"))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::MatchError::BinaryContent
        ));
    }

    #[test]
    fn test_metadata_copied_into_report() {
        let engine = MatchEngine::new(Catalog::builtin());
        let report = engine
            .analyze_job("Python", "Python and Docker", &metadata("Platform Engineer"))
            .unwrap();
        assert_eq!(report.metadata.title, "Platform Engineer");
        assert_eq!(report.metadata.company, "Acme");
    }
}
