//! Markdown processing with heading anchors, definition lists and a table
//! of contents.

pub mod highlight;

use crate::config::MarkdownConfig;
use crate::slug::{slugify, SlugRegistry};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

pub use highlight::HighlightTransformer;

/// A heading found while rendering, with the id it was given
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub title: String,
    pub id: String,
}

/// Output of [`MarkdownProcessor::render`]
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub html: String,
    pub toc_html: Option<String>,
    pub headings: Vec<Heading>,
}

/// Markdown processor with custom extensions
pub struct MarkdownProcessor {
    options: Options,
    allow_html: bool,
    toc_levels: Vec<u8>,
}

impl MarkdownProcessor {
    pub fn new(config: &MarkdownConfig) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options.insert(Options::ENABLE_DEFINITION_LIST);

        Self {
            options,
            allow_html: config.html,
            toc_levels: config.toc_levels.clone(),
        }
    }

    /// Convert markdown to HTML, collecting headings and the TOC
    pub fn render(&self, markdown: &str) -> RenderedPage {
        let events: Vec<Event> = Parser::new_ext(markdown, self.options).collect();

        let events = if self.allow_html {
            events
        } else {
            events.into_iter().map(neutralize_html).collect()
        };

        let (events, headings) = assign_heading_ids(events);

        let events = HighlightTransformer::new().transform(events);

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        let toc_entries: Vec<&Heading> = headings
            .iter()
            .filter(|h| self.toc_levels.contains(&h.level))
            .collect();
        let toc_html = if toc_entries.is_empty() {
            None
        } else {
            Some(render_toc(&toc_entries))
        };

        tracing::debug!(headings = headings.len(), "rendered markdown");

        RenderedPage {
            html: html_output,
            toc_html,
            headings,
        }
    }

    /// Convert markdown to HTML, discarding the TOC
    pub fn render_html(&self, markdown: &str) -> String {
        self.render(markdown).html
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

/// Raw HTML becomes text, so the renderer escapes it.
fn neutralize_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

/// Give every heading an id, slugifying its text unless one was set
/// explicitly with `{#id}`.
fn assign_heading_ids(events: Vec<Event<'_>>) -> (Vec<Event<'static>>, Vec<Heading>) {
    let mut registry = SlugRegistry::new();
    let mut result: Vec<Event<'static>> = Vec::with_capacity(events.len());
    let mut headings = Vec::new();
    let mut open_heading: Option<usize> = None;
    let mut title = String::new();

    for event in events {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                open_heading = Some(result.len());
                title.clear();
                result.push(event.into_static());
            }
            Event::Text(text) if open_heading.is_some() => {
                title.push_str(&text);
                result.push(Event::Text(text.into_static()));
            }
            Event::Code(code) if open_heading.is_some() => {
                title.push_str(&code);
                result.push(Event::Code(code.into_static()));
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(index) = open_heading.take() {
                    if let Event::Start(Tag::Heading { id, .. }) = &mut result[index] {
                        let base = match id.take() {
                            Some(explicit) => explicit.to_string(),
                            None => slugify(&title),
                        };
                        if !base.is_empty() {
                            let unique = registry.claim(base);
                            *id = Some(CowStr::from(unique.clone()));
                            headings.push(Heading {
                                level: level as u8,
                                title: title.trim().to_string(),
                                id: unique,
                            });
                        }
                    }
                }
                result.push(Event::End(TagEnd::Heading(level)));
            }
            other => result.push(other.into_static()),
        }
    }

    (result, headings)
}

/// Nested `<ol>` list of links, one item per heading
fn render_toc(headings: &[&Heading]) -> String {
    let mut html = String::from(r#"<nav class="toc">"#);
    let mut levels: Vec<u8> = Vec::new();

    for heading in headings {
        match levels.last() {
            Some(&top) if heading.level <= top => {
                while levels.len() > 1 && levels.last().is_some_and(|&l| l > heading.level) {
                    html.push_str("</li></ol>");
                    levels.pop();
                }
                html.push_str("</li><li>");
            }
            _ => {
                html.push_str("<ol><li>");
                levels.push(heading.level);
            }
        }
        html.push_str(&format!(
            r##"<a href="#{}">{}</a>"##,
            heading.id,
            html_escape(&heading.title)
        ));
    }

    for _ in levels {
        html.push_str("</li></ol>");
    }
    html.push_str("</nav>");
    html
}

pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
