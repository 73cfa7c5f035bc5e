//! Highlight-span computation for annotated job-description rendering.
//!
//! Produces HTML with matched and unmatched keyword occurrences wrapped in
//! spans; everything else is escaped plain text.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Matched,
    Unmatched,
}

impl SpanKind {
    fn css_class(self) -> &'static str {
        match self {
            SpanKind::Matched => "keyword-highlight matched",
            SpanKind::Unmatched => "keyword-highlight unmatched",
        }
    }
}

#[derive(Debug, Clone)]
struct HighlightSpan {
    start: usize,
    end: usize,
    kind: SpanKind,
}

/// Renders `text` with every occurrence of the given keywords wrapped in a
/// span carrying a `matched` or `unmatched` class.
///
/// Overlaps are resolved greedily: spans are sorted by start position, then
/// by descending length, and a span is dropped if it overlaps one already
/// accepted. Matched keywords are collected first, so they win exact ties
/// against unmatched ones.
pub fn highlight(text: &str, matched_keywords: &[String], unmatched_keywords: &[String]) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut spans = Vec::new();
    collect_spans(text, matched_keywords, SpanKind::Matched, &mut spans);
    collect_spans(text, unmatched_keywords, SpanKind::Unmatched, &mut spans);

    spans.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then((b.end - b.start).cmp(&(a.end - a.start)))
    });

    let mut accepted: Vec<HighlightSpan> = Vec::new();
    let mut covered_end = 0;
    for span in spans {
        if span.start >= covered_end {
            covered_end = span.end;
            accepted.push(span);
        }
    }

    let mut out = String::with_capacity(text.len() + accepted.len() * 48);
    let mut cursor = 0;
    for span in &accepted {
        out.push_str(&escape_html(&text[cursor..span.start]));
        out.push_str("<span class=\"");
        out.push_str(span.kind.css_class());
        out.push_str("\">");
        out.push_str(&escape_html(&text[span.start..span.end]));
        out.push_str("</span>");
        cursor = span.end;
    }
    out.push_str(&escape_html(&text[cursor..]));
    out
}

/// Finds every occurrence of every morphological variant of each keyword.
/// Keywords are processed longest first so phrase spans are collected before
/// spans of words they contain.
fn collect_spans(text: &str, keywords: &[String], kind: SpanKind, out: &mut Vec<HighlightSpan>) {
    let mut ordered: Vec<&String> = keywords.iter().collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    for keyword in ordered {
        for variant in variants(keyword) {
            let pattern = format!(
                "(?i)(?:^|[^a-zA-Z0-9])({})(?:$|[^a-zA-Z0-9])",
                regex::escape(&variant)
            );
            let Ok(regex) = Regex::new(&pattern) else {
                continue;
            };
            for caps in regex.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    out.push(HighlightSpan {
                        start: m.start(),
                        end: m.end(),
                        kind,
                    });
                }
            }
        }
    }
}

const VARIANT_SUFFIXES: &[&str] = &["ing", "ed", "d", "s"];

/// Separator swaps for multi-word keywords plus suffix forms. Case variants
/// are unnecessary since matching is case-insensitive.
fn variants(keyword: &str) -> Vec<String> {
    let mut bases = vec![keyword.to_string()];
    if keyword.contains(' ') {
        bases.push(keyword.replace(' ', "-"));
        bases.push(keyword.replace(' ', ""));
    }
    if keyword.contains('-') {
        bases.push(keyword.replace('-', " "));
        bases.push(keyword.replace('-', ""));
    }

    let mut all = Vec::new();
    for base in bases {
        let lower = base.to_lowercase();
        for suffix in VARIANT_SUFFIXES {
            if !lower.ends_with(suffix) {
                all.push(format!("{}{}", base, suffix));
            }
        }
        all.push(base);
    }
    all.sort_by(|a, b| b.len().cmp(&a.len()));
    all.dedup();
    all
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matched_and_unmatched_classes() {
        let html = highlight(
            "We need React and Docker",
            &owned(&["React"]),
            &owned(&["Docker"]),
        );
        assert!(html.contains("<span class=\"keyword-highlight matched\">React</span>"));
        assert!(html.contains("<span class=\"keyword-highlight unmatched\">Docker</span>"));
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let html = highlight("a < b & React", &owned(&["React"]), &[]);
        assert!(html.starts_with("a &lt; b &amp; "));
        assert!(html.contains(">React</span>"));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(highlight("", &owned(&["React"]), &[]), "");
    }

    #[test]
    fn test_no_keywords_returns_escaped_text() {
        assert_eq!(highlight("plain & simple", &[], &[]), "plain &amp; simple");
    }

    #[test]
    fn test_suffix_variant_is_highlighted() {
        let html = highlight("enjoys designing things", &owned(&["design"]), &[]);
        assert!(html.contains(">designing</span>"));
    }

    #[test]
    fn test_separator_variant_is_highlighted() {
        let html = highlight("our design-system docs", &owned(&["design system"]), &[]);
        assert!(html.contains(">design-system</span>"));
    }

    #[test]
    fn test_overlapping_spans_keep_longer() {
        let html = highlight(
            "Machine Learning pipelines",
            &owned(&["Machine Learning", "Machine"]),
            &[],
        );
        assert!(html.contains(">Machine Learning</span>"));
        // The contained single-word span must not be wrapped twice.
        assert_eq!(html.matches("<span").count(), 1);
    }

    #[test]
    fn test_matched_wins_tie_against_unmatched() {
        let html = highlight("React required", &owned(&["React"]), &owned(&["React"]));
        assert!(html.contains("matched\">React</span>"));
        assert!(!html.contains("unmatched\">React</span>"));
    }

    #[test]
    fn test_case_preserved_in_output() {
        let html = highlight("REACT everywhere", &owned(&["react"]), &[]);
        assert!(html.contains(">REACT</span>"));
    }
}
