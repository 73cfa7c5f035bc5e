//! Job domain detection from title, description and source URL.

use regex::Regex;

use crate::domain::model::Domain;

const HYBRID_PATTERNS: &[&str] = &[
    r"design[\s-]+engineer",
    r"ux[\s-]+engineer",
    r"ui[\s-]+engineer",
    r"design[\s-]+technologist",
    r"creative[\s-]+technologist",
];

const SWE_PATTERNS: &[&str] = &[
    r"software[\s-]+engineer",
    r"software[\s-]+developer",
    r"\bdeveloper\b",
    r"\bprogrammer\b",
    r"full[\s-]?stack",
    r"back[\s-]?end",
    r"\bsde\b",
];

/// Counted into the SWE score only outside design contexts.
const SWE_GENERIC_PATTERN: &str = r"\bengineer(?:ing)?\b";

/// Deliberately excludes bare "product"; a product *manager* signal or an
/// explicit marketing term is required.
const PM_MARKETING_PATTERNS: &[&str] = &[
    r"product[\s-]+manager",
    r"product[\s-]+management",
    r"product[\s-]+owner",
    r"\bmarketing\b",
    r"\broadmap\b",
    r"go[\s-]?to[\s-]?market",
    r"\bgtm\b",
    r"\bgrowth\b",
    r"\bseo\b",
    r"\bbrand(?:ing)?\b",
    r"\bcampaigns?\b",
];

const DESIGN_PATTERNS: &[&str] = &[
    r"product[\s-]+design(?:er)?",
    r"ux[\s-]+design(?:er)?",
    r"ui[\s-]+design(?:er)?",
    r"\bdesigner\b",
    r"\bfigma\b",
    r"user[\s-]+research",
    r"interaction[\s-]+design",
    r"visual[\s-]+design",
    r"design[\s-]+systems?",
    r"prototyp(?:e|ing)",
    r"\busability\b",
];

/// Contexts in which a generic "engineer(ing)" mention does not indicate a
/// pure software role.
const DESIGN_CONTEXT_PATTERNS: &[&str] = &[
    r"design[\s-]+engineer",
    r"ux[\s-]+engineer",
    r"\bdesigner\b",
    r"product[\s-]+design",
];

pub struct DomainClassifier {
    hybrid: Vec<Regex>,
    swe: Vec<Regex>,
    swe_generic: Regex,
    pm_marketing: Vec<Regex>,
    design: Vec<Regex>,
    design_context: Vec<Regex>,
    title_design: Regex,
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    // Pattern literals are fixed at compile time; failures are programmer
    // errors caught by the unit tests below.
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

impl DomainClassifier {
    pub fn new() -> Self {
        Self {
            hybrid: compile_all(HYBRID_PATTERNS),
            swe: compile_all(SWE_PATTERNS),
            swe_generic: Regex::new(SWE_GENERIC_PATTERN).unwrap(),
            pm_marketing: compile_all(PM_MARKETING_PATTERNS),
            design: compile_all(DESIGN_PATTERNS),
            design_context: compile_all(DESIGN_CONTEXT_PATTERNS),
            title_design: Regex::new(r"(?i)design").unwrap(),
        }
    }

    /// Picks a single domain for the job. Pure function of its inputs.
    ///
    /// Hybrid design/engineering signals short-circuit everything else;
    /// otherwise the per-family match counts decide, with design winning
    /// ties against SWE and a raw-title "design" check breaking the rest.
    pub fn detect(&self, job_title: &str, job_description: &str, source_url: &str) -> Domain {
        let text = format!("{} {} {}", job_title, job_description, source_url).to_lowercase();

        if self.hybrid.iter().any(|re| re.is_match(&text)) {
            return Domain::HybridDesignSwe;
        }

        let design_context = self.design_context.iter().any(|re| re.is_match(&text));

        let mut swe_score = count_matches(&self.swe, &text);
        if !design_context {
            swe_score += self.swe_generic.find_iter(&text).count();
        }
        let pm_score = count_matches(&self.pm_marketing, &text);
        let design_score = count_matches(&self.design, &text);

        if design_score > 0 && design_score >= swe_score && design_score >= pm_score {
            Domain::Design
        } else if design_score > 0
            && design_score == swe_score
            && self.title_design.is_match(job_title)
        {
            Domain::Design
        } else if swe_score > 0 && swe_score > pm_score {
            Domain::Swe
        } else if pm_score > 0 {
            Domain::PmMarketing
        } else {
            Domain::General
        }
    }
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hybrid_has_absolute_priority() {
        let classifier = DomainClassifier::new();
        assert_eq!(
            classifier.detect("Design Engineer", "", ""),
            Domain::HybridDesignSwe
        );
        assert_eq!(
            classifier.detect("UX Engineer", "build and prototype interfaces", ""),
            Domain::HybridDesignSwe
        );
    }

    #[test]
    fn test_swe_role() {
        let classifier = DomainClassifier::new();
        let domain = classifier.detect(
            "Senior Software Engineer",
            "Looking for a software engineer with Python, React, and AWS experience",
            "",
        );
        assert_eq!(domain, Domain::Swe);
    }

    #[test]
    fn test_design_role() {
        let classifier = DomainClassifier::new();
        let domain = classifier.detect(
            "Product Designer",
            "We need a UX designer with Figma, prototyping, and user research skills",
            "",
        );
        assert_eq!(domain, Domain::Design);
    }

    #[test]
    fn test_pm_role() {
        let classifier = DomainClassifier::new();
        let domain = classifier.detect(
            "Product Manager",
            "Looking for a product manager with roadmap, GTM strategy, and marketing experience",
            "",
        );
        assert_eq!(domain, Domain::PmMarketing);
    }

    #[test]
    fn test_bare_product_does_not_trigger_pm() {
        let classifier = DomainClassifier::new();
        // "roadmap" is the trigger here, never the word "product" alone.
        assert_eq!(
            classifier.detect("Product Owner", "manages the product roadmap", ""),
            Domain::PmMarketing
        );
        assert_eq!(
            classifier.detect("Product Specialist", "ships a great product", ""),
            Domain::General
        );
    }

    #[test]
    fn test_generic_engineer_suppressed_in_design_context() {
        let classifier = DomainClassifier::new();
        // "designer" appears, so the lone generic "engineering" mention must
        // not tip the result toward SWE.
        let domain = classifier.detect(
            "Visual Designer",
            "collaborate with engineering on the product design language",
            "",
        );
        assert_eq!(domain, Domain::Design);
    }

    #[test]
    fn test_title_tiebreak_prefers_design() {
        let classifier = DomainClassifier::new();
        let domain = classifier.detect(
            "Design Lead",
            "work with figma and with our developer on marketing pages and brand campaigns",
            "",
        );
        // design 1 (figma) vs swe 1 (developer) vs pm 3; the raw title
        // carries "design", so the tie against swe resolves to design.
        assert_eq!(domain, Domain::Design);
    }

    #[test]
    fn test_no_signals_yields_general() {
        let classifier = DomainClassifier::new();
        assert_eq!(classifier.detect("", "", ""), Domain::General);
    }

    #[test]
    fn test_deterministic() {
        let classifier = DomainClassifier::new();
        let a = classifier.detect("Backend Developer", "Go and Kubernetes", "jobs.example.com");
        let b = classifier.detect("Backend Developer", "Go and Kubernetes", "jobs.example.com");
        assert_eq!(a, b);
    }
}
