//! Heading slugs and cross-reference links.

use crate::markdown::html_escape;
use crate::uri::encode_uri_component;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DROPPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[():.,&'`]").unwrap());

/// Convert heading text to the anchor id used in rendered pages
///
/// Rules:
/// - Trim and lowercase
/// - Replace each run of whitespace with a single hyphen
/// - Drop `( ) : . , & ' \``
/// - Percent-encode whatever else is not URL-safe
///
/// # Examples
///
/// ```
/// use folio_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Node.js (v20)"), "nodejs-v20");
/// assert_eq!(slugify("Über"), "%C3%BCber");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let cleaned = DROPPED.replace_all(&hyphenated, "");
    encode_uri_component(&cleaned)
}

/// Link to a heading on another page, e.g. `ref_link("dom", "The Tree")`
pub fn ref_link(page: &str, title: &str) -> String {
    format!(
        r##"<a href="/{}/#{}">{}</a>"##,
        page,
        slugify(title),
        html_escape(title)
    )
}

/// Hands out unique slugs within one page by suffixing repeats with `-1`, `-2`, ...
#[derive(Debug, Default)]
pub struct SlugRegistry {
    seen: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `slug` (or the first free suffixed form of it)
    pub fn claim(&mut self, slug: String) -> String {
        let mut candidate = slug.clone();
        while let Some(count) = self.seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{}-{}", slug, count);
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("The DOM Tree"), "the-dom-tree");
    }

    #[test]
    fn test_dropped_characters() {
        assert_eq!(slugify("What's new?"), "whats-new%3F");
        assert_eq!(slugify("a(b):c.d,e&f`g`"), "abcdefg");
        assert_eq!(slugify("Rust & Safety"), "rust--safety");
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(slugify("  Hello \t\n World  "), "hello-world");
        assert_eq!(slugify("hello_world"), "hello_world");
    }

    #[test]
    fn test_unicode_is_percent_encoded() {
        assert_eq!(slugify("Café"), "caf%C3%A9");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("..."), "");
    }

    #[test]
    fn test_ref_link() {
        assert_eq!(
            ref_link("events", "Event Loop"),
            r##"<a href="/events/#event-loop">Event Loop</a>"##
        );
        assert_eq!(
            ref_link("dom", "Nodes & <Elements>"),
            r##"<a href="/dom/#nodes--%3Celements%3E">Nodes &amp; &lt;Elements&gt;</a>"##
        );
    }

    #[test]
    fn test_registry_suffixes_repeats() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.claim("intro".into()), "intro");
        assert_eq!(registry.claim("intro".into()), "intro-1");
        assert_eq!(registry.claim("intro".into()), "intro-2");
        assert_eq!(registry.claim("intro-1".into()), "intro-1-1");
        assert_eq!(registry.claim("other".into()), "other");
    }
}
