//! Naked URL linting for manuscript sources.
//!
//! A naked URL is an `http(s):` address written straight into the prose
//! instead of inside a link, an HTML attribute or angle brackets.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

static NAKED_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:[^<>";]|^)(https?:(?:[^<\s]+))"#).unwrap());

/// One naked URL found in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NakedUrl {
    pub path: PathBuf,
    /// 1-based line number
    pub line: usize,
    pub url: String,
}

/// Find naked URLs in `content`. Only `.md` inputs are checked.
pub fn lint_naked_urls(input_path: &Path, content: &str) -> Vec<NakedUrl> {
    if !input_path.to_string_lossy().ends_with(".md") {
        return Vec::new();
    }

    let found: Vec<NakedUrl> = NAKED_URL
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| NakedUrl {
            path: input_path.to_path_buf(),
            line: content[..m.start()].matches('\n').count() + 1,
            url: m.as_str().to_string(),
        })
        .collect();

    if !found.is_empty() {
        tracing::debug!(path = %input_path.display(), count = found.len(), "naked URLs found");
    }
    found
}

/// Warning block listing the findings for one file
pub fn format_report(input_path: &Path, findings: &[NakedUrl]) -> String {
    let mut out = format!("Naked URL Linter ({}):", input_path.display());
    for finding in findings {
        out.push_str("\n    ");
        out.push_str(&finding.url);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(content: &str) -> Vec<String> {
        lint_naked_urls(Path::new("ch1.md"), content)
            .into_iter()
            .map(|f| f.url)
            .collect()
    }

    #[test]
    fn test_finds_bare_urls() {
        assert_eq!(
            urls("See https://example.com/a for more.\nhttp://x.test"),
            vec!["https://example.com/a", "http://x.test"]
        );
    }

    #[test]
    fn test_ignores_attributes_and_autolinks() {
        assert!(urls(r#"<a href="https://example.com">x</a>"#).is_empty());
        assert!(urls("<https://example.com>").is_empty());
    }

    #[test]
    fn test_markdown_link_target_is_reported() {
        // `(` is not excluded, so inline link targets still count
        assert_eq!(urls("[x](https://e.test/p)"), vec!["https://e.test/p)"]);
    }

    #[test]
    fn test_url_stops_at_whitespace_and_angle() {
        assert_eq!(urls("go https://e.test/a<b"), vec!["https://e.test/a"]);
        assert_eq!(urls("https://e.test/a b"), vec!["https://e.test/a"]);
    }

    #[test]
    fn test_line_numbers() {
        let findings = lint_naked_urls(Path::new("x.md"), "one\ntwo https://a.test\n\nhttps://b.test");
        let lines: Vec<usize> = findings.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_non_markdown_skipped() {
        assert!(lint_naked_urls(Path::new("page.njk"), "https://example.com").is_empty());
    }

    #[test]
    fn test_report_format() {
        let path = Path::new("ch1.md");
        let findings = lint_naked_urls(path, "https://a.test and https://b.test");
        assert_eq!(
            format_report(path, &findings),
            "Naked URL Linter (ch1.md):\n    https://a.test\n    https://b.test"
        );
    }
}
