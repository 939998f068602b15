//! Selection feedback: build a prefilled "file an issue" URL from the text a
//! reader has highlighted.
//!
//! The report body starts with the page URL, deep-linked to the closest
//! element carrying an `id`, followed by the selection quoted as an escaped
//! Markdown blockquote. The whole thing is passed to the issue tracker in
//! the `body` query parameter.

pub mod dom;
pub mod escape;
pub mod link;
pub mod report;
pub mod tree;

pub use dom::{Document, DocumentPosition, Selection};
pub use escape::escape_markup;
pub use link::{FeedbackHost, FeedbackLink, StaticPage};
pub use report::{
    best_node_to_report, build_body, quote_selection, resolve_filing_url, url_to_report,
    MAX_QUOTE_CHARS,
};
pub use tree::{NodeId, NodeTree, Position, TextSelection};
