//! Turning a selection into a prefilled issue-filing URL.

use super::dom::{Document, DocumentPosition, Selection};
use super::escape::escape_markup;
use crate::uri::{encode_uri_component, strip_fragment};

/// Longest excerpt quoted verbatim, in characters.
pub const MAX_QUOTE_CHARS: usize = 1000;

const ELLIPSIS: &str = "...";

/// Pick the node whose nearest `id` the report should link to.
///
/// Starts at the selection's anchor, switching to the focus when it lies
/// later in the document or inside the anchor. From there, walks to the
/// previous sibling (or the parent when there is none) until a node with
/// an `id` turns up.
pub fn best_node_to_report<D, S>(doc: &D, selection: &S) -> Option<D::Node>
where
    D: Document,
    S: Selection<D::Node>,
{
    let mut node = selection.anchor_node()?;

    if let Some(focus) = selection.focus_node() {
        let position = doc.compare_document_position(node, focus);
        if position.intersects(DocumentPosition::FOLLOWING | DocumentPosition::CONTAINED_BY) {
            node = focus;
        }
    }

    loop {
        if doc.id(node).is_some_and(|id| !id.is_empty()) {
            return Some(node);
        }
        node = doc
            .previous_sibling(node)
            .or_else(|| doc.parent(node))?;
    }
}

/// The page URL to put at the top of the report, pointing at the nearest
/// identified element when there is one.
pub fn url_to_report<D, S>(current_location: &str, doc: &D, selection: &S) -> String
where
    D: Document,
    S: Selection<D::Node>,
{
    let base = strip_fragment(current_location);
    match best_node_to_report(doc, selection).and_then(|node| doc.id(node)) {
        Some(id) => format!("{base}#{id}"),
        None => base.to_string(),
    }
}

/// Truncate to [`MAX_QUOTE_CHARS`], ending with an ellipsis when cut.
fn truncate_quote(text: &str) -> String {
    if text.chars().count() <= MAX_QUOTE_CHARS {
        return text.to_string();
    }
    let keep = MAX_QUOTE_CHARS - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Quote `selection_text` as a Markdown blockquote, escaped.
///
/// Empty input yields an empty string rather than a bare `> `.
pub fn quote_selection(selection_text: &str) -> String {
    let quoted = escape_markup(&truncate_quote(selection_text))
        .replace('\r', "")
        .replace('\n', "\n> ");
    if quoted.is_empty() {
        quoted
    } else {
        format!("> {quoted}")
    }
}

/// Issue body: the page URL, a blank line, then the quoted selection.
pub fn build_body(report_url: &str, selection_text: &str) -> String {
    format!("{report_url}\n\n{}", quote_selection(selection_text))
}

/// Full issue-filing URL for `selection` on the page at `current_location`.
pub fn resolve_filing_url<D, S>(
    base_filing_url: &str,
    current_location: &str,
    doc: &D,
    selection: &S,
) -> String
where
    D: Document,
    S: Selection<D::Node>,
{
    let report_url = url_to_report(current_location, doc, selection);
    let body = build_body(&report_url, &selection.text());
    tracing::debug!(%report_url, body_len = body.len(), "resolved feedback report");
    format!("{base_filing_url}?body={}", encode_uri_component(&body))
}
