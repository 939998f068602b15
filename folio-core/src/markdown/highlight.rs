//! Code syntax highlighting using syntect.

use super::html_escape;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Fence info string for DOM tree diagrams, which are shown verbatim.
pub const DOM_TREE_LANG: &str = "dom-tree";

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME: OnceLock<Option<Theme>> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme() -> Option<&'static Theme> {
    THEME
        .get_or_init(|| {
            let theme_set = ThemeSet::load_defaults();
            theme_set
                .themes
                .get("InspiredGitHub")
                .or_else(|| theme_set.themes.get("base16-ocean.light"))
                .cloned()
        })
        .as_ref()
}

/// Transformer for syntax highlighting fenced code blocks
pub struct HighlightTransformer;

impl HighlightTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Transform events, replacing fenced code with highlighted HTML
    pub fn transform(&self, events: Vec<Event<'_>>) -> Vec<Event<'static>> {
        let mut result = Vec::with_capacity(events.len());
        let mut code_lang: Option<String> = None;
        let mut code_content = String::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) if !lang.is_empty() => {
                    code_lang = Some(lang.split_whitespace().next().unwrap_or("").to_string());
                    code_content.clear();
                }
                Event::Text(text) if code_lang.is_some() => {
                    code_content.push_str(text.as_ref());
                }
                Event::End(TagEnd::CodeBlock) if code_lang.is_some() => {
                    let lang = code_lang.take().unwrap_or_default();
                    let html = if lang == DOM_TREE_LANG {
                        format!(
                            "<pre class=\"dom-tree\"><code>{}</code></pre>\n",
                            html_escape(&code_content)
                        )
                    } else {
                        self.highlight_code(&code_content, &lang)
                    };
                    result.push(Event::Html(CowStr::from(html)));
                }
                other => result.push(other.into_static()),
            }
        }

        result
    }

    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let ss = syntax_set();
        let syntax = ss
            .find_syntax_by_token(lang)
            .or_else(|| ss.find_syntax_by_extension(lang))
            .unwrap_or_else(|| ss.find_syntax_plain_text());

        let highlighted =
            theme().and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok());
        match highlighted {
            Some(html) => html,
            None => {
                tracing::debug!(lang, "highlighting unavailable; emitting plain code block");
                format!("<pre><code>{}</code></pre>\n", html_escape(code))
            }
        }
    }
}

impl Default for HighlightTransformer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{html, Parser};

    fn render(md: &str) -> String {
        let events: Vec<Event> = Parser::new(md).collect();
        let events = HighlightTransformer::new().transform(events);
        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }

    #[test]
    fn test_rust_is_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_dom_tree_is_verbatim() {
        let html = render("```dom-tree\n<html>\n  <body>\n```\n");
        assert!(html.contains("<pre class=\"dom-tree\"><code>&lt;html&gt;\n  &lt;body&gt;\n</code></pre>"));
    }

    #[test]
    fn test_unfenced_code_untouched() {
        let html = render("    indented\n");
        assert!(html.contains("<pre><code>indented\n</code></pre>"));

        let html = render("```\nplain\n```\n");
        assert!(html.contains("<pre><code>plain\n</code></pre>"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain_text_syntax() {
        let html = render("```nosuchlang\na < b\n```\n");
        assert!(html.contains("a &lt; b"));
    }
}
