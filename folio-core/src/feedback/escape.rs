//! Escaping of quoted text for GitHub-flavoured Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that would start an emoji shortcode, a mention, or a setext
/// heading underline.
static TRIGGERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[:@=]").unwrap());

/// Markdown punctuation that gets a backslash.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\\`*_{}\[\]()#+\-.!~|]").unwrap());

const ZERO_WIDTH_SPACE: &str = "\u{200b}";

/// Neutralise markup in `text` so it renders literally inside a GFM
/// blockquote.
///
/// The passes run in a fixed order. `&` is replaced first so the entities
/// introduced by the second pass are not escaped again, and none of the
/// later passes touch characters that occur inside those entities.
pub fn escape_markup(text: &str) -> String {
    let escaped = text.replace('&', "&amp;");
    let escaped = escaped.replace('<', "&lt;").replace('>', "&gt;");
    let escaped = TRIGGERS.replace_all(&escaped, format!("${{0}}{ZERO_WIDTH_SPACE}").as_str());
    PUNCTUATION.replace_all(&escaped, r"\${0}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_entities() {
        assert_eq!(escape_markup("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_markup("x > y"), "x &gt; y");
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_triggers_get_zero_width_space() {
        assert_eq!(escape_markup("@user"), "@\u{200b}user");
        assert_eq!(escape_markup(":smile:"), ":\u{200b}smile:\u{200b}");
        assert_eq!(escape_markup("a=b"), "a=\u{200b}b");
    }

    #[test]
    fn test_punctuation_backslashed() {
        assert_eq!(escape_markup("*bold*"), r"\*bold\*");
        assert_eq!(escape_markup("# Title"), r"\# Title");
        assert_eq!(escape_markup("[a](b)"), r"\[a\]\(b\)");
        assert_eq!(escape_markup(r"a\b"), r"a\\b");
        assert_eq!(escape_markup("`x` _y_ {z}"), r"\`x\` \_y\_ \{z\}");
        assert_eq!(escape_markup("1+1-2.!~|"), r"1\+1\-2\.\!\~\|");
    }

    #[test]
    fn test_entities_not_backslashed() {
        // `;` is not Markdown punctuation, so the entity survives intact.
        assert_eq!(escape_markup("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_multibyte_content_untouched() {
        assert_eq!(escape_markup("naïve café 日本語"), "naïve café 日本語");
        assert_eq!(escape_markup("日本:語"), "日本:\u{200b}語");
    }

    #[test]
    fn test_second_application_keeps_structure_escaped() {
        let once = escape_markup("<a href=\"x\">&</a>");
        let twice = escape_markup(&once);
        assert!(!twice.contains('<'));
        assert!(!twice.contains('>'));
        for (i, _) in twice.match_indices('&') {
            let rest = &twice[i..];
            assert!(
                rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;"),
                "bare ampersand in {twice:?}"
            );
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape_markup(""), "");
    }
}
