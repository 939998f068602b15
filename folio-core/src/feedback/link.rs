//! The "file an issue" link injected into each page.

use super::dom::{Document, Selection};
use super::report::resolve_filing_url;
use super::tree::{NodeTree, Position, TextSelection};
use crate::config::FeedbackConfig;
use crate::markdown::html_escape;

pub const ACCESS_KEY: &str = "1";
pub const CLASS_NAME: &str = "selected-text-file-an-issue";
pub const TITLE: &str = "Send feedback about the selected text";

/// Octicons "issue-opened".
pub const ICON_SVG: &str = r#"<svg height="32" class="octicon octicon-issue-opened" viewBox="0 0 14 16" width="28" aria-label="Feedback" role="img"><path fill-rule="evenodd" d="M7 2.3c3.14 0 5.7 2.56 5.7 5.7s-2.56 5.7-5.7 5.7A5.71 5.71 0 0 1 1.3 8c0-3.14 2.56-5.7 5.7-5.7zM7 1C3.14 1 0 4.14 0 8s3.14 7 7 7 7-3.14 7-7-3.14-7-7-7zm1 3H6v5h2V4zm0 6H6v2h2v-2z"></path></svg>"#;

/// Where the link reads the page state from when it is activated.
pub trait FeedbackHost {
    type Document: Document;
    type Selection<'a>: Selection<<Self::Document as Document>::Node>
    where
        Self: 'a;

    /// Current page URL, possibly with a fragment.
    fn location(&self) -> String;

    fn document(&self) -> &Self::Document;

    /// The user's current selection.
    fn selection(&self) -> Self::Selection<'_>;
}

/// Anchor element whose destination is only worked out on activation.
///
/// Until [`activate`](Self::activate) is called, `href` is the configured
/// filing URL unchanged.
pub struct FeedbackLink<H> {
    base_filing_url: String,
    href: String,
    host: H,
}

impl<H: FeedbackHost> FeedbackLink<H> {
    /// Create the link for `host`. Nothing is read from the host yet.
    pub fn install(config: &FeedbackConfig, host: H) -> Self {
        let base_filing_url = config.file_issue_url.clone().unwrap_or_default();
        if base_filing_url.is_empty() {
            tracing::warn!("No file_issue_url configured; feedback link has an empty target");
        }
        Self {
            href: base_filing_url.clone(),
            base_filing_url,
            host,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn base_filing_url(&self) -> &str {
        &self.base_filing_url
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Recompute `href` from the host's current location and selection.
    pub fn activate(&mut self) -> &str {
        let location = self.host.location();
        let selection = self.host.selection();
        self.href = resolve_filing_url(
            &self.base_filing_url,
            &location,
            self.host.document(),
            &selection,
        );
        &self.href
    }

    /// Render the link as an HTML `<a>` element with its current `href`.
    pub fn to_html(&self) -> String {
        format!(
            r#"<a href="{}" accesskey="{}" class="{}" title="{}">{}</a>"#,
            html_escape(&self.href),
            ACCESS_KEY,
            CLASS_NAME,
            html_escape(TITLE),
            ICON_SVG
        )
    }
}

/// A page held in memory: a [`NodeTree`], its URL, and a selection.
#[derive(Debug, Clone)]
pub struct StaticPage {
    tree: NodeTree,
    location: String,
    anchor: Option<Position>,
    focus: Option<Position>,
}

impl StaticPage {
    pub fn new(tree: NodeTree, location: impl Into<String>) -> Self {
        Self {
            tree,
            location: location.into(),
            anchor: None,
            focus: None,
        }
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn select(&mut self, anchor: Position, focus: Position) {
        self.anchor = Some(anchor);
        self.focus = Some(focus);
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
        self.focus = None;
    }
}

impl FeedbackHost for StaticPage {
    type Document = NodeTree;
    type Selection<'a> = TextSelection<'a>;

    fn location(&self) -> String {
        self.location.clone()
    }

    fn document(&self) -> &NodeTree {
        &self.tree
    }

    fn selection(&self) -> TextSelection<'_> {
        match (self.anchor, self.focus) {
            (Some(anchor), Some(focus)) => self.tree.select(anchor, focus),
            _ => self.tree.empty_selection(),
        }
    }
}
