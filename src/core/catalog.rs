//! Keyword catalog: static lists partitioned by domain, synonym groups,
//! prefix families, and the per-keyword compiled pattern cache.
//!
//! The catalog is built once (from a fetched `CatalogData` or the built-in
//! lists) and is read-only afterward; every analysis call borrows it.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::domain::model::CatalogData;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{MatchError, Result};

/// General technical keywords checked for every domain.
const TECH_KEYWORDS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "Git",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "HTML",
    "CSS",
    "Redux",
    "REST API",
    "GraphQL",
    "Testing",
    "CI/CD",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Agile",
    "Scrum",
    "Linux",
    "Microservices",
];

/// Soft skills, unioned into every domain's catalog.
const SOFT_KEYWORDS: &[&str] = &[
    "Communication",
    "Leadership",
    "Problem Solving",
    "Teamwork",
    "Collaboration",
    "Time Management",
    "Adaptability",
    "Critical Thinking",
    "Mentoring",
    "Stakeholder Management",
];

const SWE_KEYWORDS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Python",
    "Java",
    "Go",
    "Rust",
    "C++",
    "SQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "GraphQL",
    "REST API",
    "Microservices",
    "Distributed Systems",
    "System Design",
    "Docker",
    "Kubernetes",
    "AWS",
    "GCP",
    "Azure",
    "CI/CD",
    "Git",
    "Unit Testing",
    "TDD",
    "Agile",
    "Scrum",
    "HTML",
    "CSS",
    "Sass",
    "Tailwind",
    "Webpack",
    "Frontend",
    "Backend",
    "Machine Learning",
];

const PM_MARKETING_KEYWORDS: &[&str] = &[
    "Product Management",
    "Roadmap",
    "Go-to-Market",
    "Market Research",
    "A/B Testing",
    "Analytics",
    "Google Analytics",
    "SEO",
    "SEM",
    "Content Marketing",
    "Email Marketing",
    "Growth",
    "KPIs",
    "OKRs",
    "User Stories",
    "Customer Segmentation",
    "Positioning",
    "Campaigns",
    "Brand Strategy",
    "CRM",
    "Salesforce",
    "Agile",
    "Scrum",
];

const DESIGN_KEYWORDS: &[&str] = &[
    "Figma",
    "Sketch",
    "Adobe XD",
    "Photoshop",
    "Illustrator",
    "Prototyping",
    "Wireframing",
    "User Research",
    "Usability Testing",
    "Interaction Design",
    "Visual Design",
    "Design Systems",
    "Design Thinking",
    "Information Architecture",
    "User Flows",
    "UX",
    "UI",
    "Accessibility",
    "Typography",
    "Motion Design",
    "Branding",
];

/// Interchangeable spellings; the first entry of each group is canonical.
/// A spelling belongs to at most one group (first match wins on build).
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["react", "react.js", "reactjs", "react js"],
    &["node.js", "nodejs", "node js"],
    &["javascript", "js", "ecmascript"],
    &["typescript", "ts"],
    &["vue", "vue.js", "vuejs"],
    &["aws", "amazon web services"],
    &["gcp", "google cloud platform", "google cloud"],
    &["kubernetes", "k8s"],
    &["postgresql", "postgres"],
    &["ci/cd", "cicd", "ci cd", "continuous integration"],
    &["machine learning", "ml"],
    &["ux", "user experience"],
    &["ui", "user interface"],
];

/// Word stems used to fold morphological variants toward an entry already
/// present in the same working set during comparison-only normalization.
const PREFIX_STEMS: &[&str] = &[
    "design",
    "develop",
    "engineer",
    "test",
    "market",
    "manage",
    "program",
    "research",
    "lead",
];

/// Degraded-mode lists used when the catalog source fails.
const FALLBACK_TECH: &[&str] = &[
    "JavaScript",
    "React",
    "TypeScript",
    "Node.js",
    "Git",
    "SQL",
    "MongoDB",
    "HTML/CSS",
    "Redux",
    "Testing",
    "Python",
    "AWS",
    "Docker",
    "Agile",
];

const FALLBACK_SOFT: &[&str] = &["Communication", "Leadership", "Problem Solving", "Teamwork"];

fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl CatalogData {
    /// Full catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            tech_keywords: to_owned_list(TECH_KEYWORDS),
            soft_keywords: to_owned_list(SOFT_KEYWORDS),
            swe_keywords: to_owned_list(SWE_KEYWORDS),
            pm_marketing_keywords: to_owned_list(PM_MARKETING_KEYWORDS),
            design_keywords: to_owned_list(DESIGN_KEYWORDS),
        }
    }

    /// Minimal hardcoded catalog substituted when loading fails.
    pub fn fallback() -> Self {
        Self {
            tech_keywords: to_owned_list(FALLBACK_TECH),
            soft_keywords: to_owned_list(FALLBACK_SOFT),
            swe_keywords: Vec::new(),
            pm_marketing_keywords: Vec::new(),
            design_keywords: Vec::new(),
        }
    }
}

/// Compiled match patterns for a single catalog keyword, tried in order.
#[derive(Debug)]
pub struct KeywordPatterns {
    /// Whole-word pattern with flexible spacing and an optional trailing `s`.
    pub exact: Regex,
    /// Singular retry for keywords that end in `s` (no optional-s).
    pub singular: Option<Regex>,
    /// `ing`/`d`/`ed` suffix retries.
    pub suffixed: Vec<Regex>,
}

/// Joins the keyword's words with `[\s-]+` so "Design Systems" matches
/// "Design-Systems" but not "Design of Systems". Single words pass through
/// escaped.
fn boundary_body(literal: &str) -> String {
    literal
        .split_whitespace()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join(r"[\s-]+")
}

fn exact_pattern(literal: &str) -> String {
    format!(
        "(?i)(?:^|[^a-zA-Z0-9])({})(s)?(?:$|[^a-zA-Z0-9])",
        boundary_body(literal)
    )
}

fn bare_pattern(literal: &str) -> String {
    format!(
        "(?i)(?:^|[^a-zA-Z0-9])({})(?:$|[^a-zA-Z0-9])",
        boundary_body(literal)
    )
}

const EXTRA_SUFFIXES: &[&str] = &["ing", "d", "ed"];

impl KeywordPatterns {
    fn compile(keyword: &str) -> Result<Self> {
        let build = |pattern: String| -> Result<Regex> {
            Regex::new(&pattern).map_err(|e| MatchError::PatternError {
                keyword: keyword.to_string(),
                message: e.to_string(),
            })
        };

        let exact = build(exact_pattern(keyword))?;

        let singular = if keyword.ends_with('s') && keyword.len() > 3 {
            Some(build(bare_pattern(&keyword[..keyword.len() - 1]))?)
        } else {
            None
        };

        let suffixed = EXTRA_SUFFIXES
            .iter()
            .map(|suffix| build(exact_pattern(&format!("{}{}", keyword, suffix))))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            exact,
            singular,
            suffixed,
        })
    }
}

/// Immutable keyword catalog with precompiled lookups.
pub struct Catalog {
    data: CatalogData,
    degraded: bool,
    soft_lookup: HashSet<String>,
    synonyms: HashMap<String, String>,
    prefix_stems: Vec<String>,
    patterns: HashMap<String, KeywordPatterns>,
}

impl Catalog {
    pub fn new(data: CatalogData) -> Self {
        Self::build(data, false)
    }

    /// Catalog built from the hardcoded degraded-mode lists.
    pub fn fallback() -> Self {
        Self::build(CatalogData::fallback(), true)
    }

    /// Catalog built from the full built-in lists.
    pub fn builtin() -> Self {
        Self::build(CatalogData::builtin(), false)
    }

    fn build(data: CatalogData, degraded: bool) -> Self {
        let soft_lookup = data
            .soft_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();

        // Variant spelling -> canonical (first entry of the group).
        // First group wins if a spelling would appear twice.
        let mut synonyms = HashMap::new();
        for group in SYNONYM_GROUPS {
            let canonical = group[0].to_string();
            for spelling in *group {
                synonyms
                    .entry(spelling.to_string())
                    .or_insert_with(|| canonical.clone());
            }
        }

        let prefix_stems = PREFIX_STEMS.iter().map(|s| s.to_string()).collect();

        // One compiled pattern set per distinct keyword spelling across all
        // lists. A keyword whose pattern fails to compile is dropped from
        // matching but never aborts the build.
        let mut patterns: HashMap<String, KeywordPatterns> = HashMap::new();
        let all_lists = [
            &data.tech_keywords,
            &data.soft_keywords,
            &data.swe_keywords,
            &data.pm_marketing_keywords,
            &data.design_keywords,
        ];
        for list in all_lists {
            for keyword in list {
                if patterns.contains_key(keyword) {
                    continue;
                }
                match KeywordPatterns::compile(keyword) {
                    Ok(compiled) => {
                        patterns.insert(keyword.clone(), compiled);
                    }
                    Err(e) => {
                        tracing::warn!("Skipping unmatchable catalog entry: {}", e);
                    }
                }
            }
        }

        Self {
            data,
            degraded,
            soft_lookup,
            synonyms,
            prefix_stems,
            patterns,
        }
    }

    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    /// True when this catalog is the fallback substituted after a failed
    /// load; domain-specific matching is degraded.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn is_soft_skill(&self, keyword: &str) -> bool {
        self.soft_lookup.contains(&keyword.to_lowercase())
    }

    /// Canonical spelling for a lowercased keyword, if it belongs to a
    /// synonym group.
    pub fn canonical_for(&self, lowercased: &str) -> Option<&str> {
        self.synonyms.get(lowercased).map(|s| s.as_str())
    }

    /// Prefix family stems in their declared order; iteration order is part
    /// of the normalization contract.
    pub fn prefix_stems(&self) -> &[String] {
        &self.prefix_stems
    }

    pub fn patterns_for(&self, keyword: &str) -> Option<&KeywordPatterns> {
        self.patterns.get(keyword)
    }
}

/// Fetches the catalog from `source`, substituting the hardcoded fallback
/// if the fetch or parse fails so the engine degrades instead of failing.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.fetch().await {
        Ok(data) if !data.is_empty() => {
            tracing::info!(
                "Catalog loaded: {} tech + {} soft keywords",
                data.tech_keywords.len(),
                data.soft_keywords.len()
            );
            Catalog::new(data)
        }
        Ok(_) => {
            tracing::warn!("Catalog source returned no keywords, using fallback catalog");
            Catalog::fallback()
        }
        Err(e) => {
            tracing::warn!(
                "Catalog load failed ({}), using fallback catalog; matching is degraded",
                e
            );
            Catalog::fallback()
        }
    }
}
