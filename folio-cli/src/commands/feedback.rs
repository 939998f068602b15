//! Feedback link commands: compute a filing URL, print the link markup.

use super::load_optional_config;
use anyhow::{Context, Result};
use folio_core::config::FeedbackConfig;
use folio_core::feedback::{build_body, url_to_report, FeedbackHost, FeedbackLink, Selection};
use folio_core::{Config, NodeTree, StaticPage};
use std::path::Path;

pub struct FileIssueOptions {
    pub location: String,
    pub anchor_id: Option<String>,
    pub base: Option<String>,
    pub body: bool,
}

/// Print the issue-filing URL for `text` selected inside the section
/// `anchor_id` of the page at `location`.
pub fn file_issue(config_path: &Path, text: &str, opts: FileIssueOptions) -> Result<()> {
    let feedback = match opts.base {
        Some(base) => FeedbackConfig {
            file_issue_url: Some(base),
        },
        None => Config::from_file(config_path)
            .context("Failed to load configuration (or pass --base)")?
            .feedback,
    };

    let mut tree = NodeTree::new();
    let root = tree.root();
    let section = tree.append_element(root, opts.anchor_id.as_deref());
    let text_node = tree.append_text(section, text);

    let mut page = StaticPage::new(tree, opts.location);
    let (start, end) = page.tree().contents_range(text_node);
    page.select(start, end);

    if opts.body {
        let selection = page.selection();
        let report_url = url_to_report(&page.location(), page.document(), &selection);
        println!("{}", build_body(&report_url, &selection.text()));
        return Ok(());
    }

    let mut link = FeedbackLink::install(&feedback, page);
    println!("{}", link.activate());
    Ok(())
}

/// Print the feedback link as it is injected into a page, before any click.
pub fn print_widget(config_path: &Path) -> Result<()> {
    let config = load_optional_config(config_path)?;
    let (feedback, location) = match config {
        Some(config) => (config.feedback, config.site.url.unwrap_or_default()),
        None => (FeedbackConfig::default(), String::new()),
    };

    let link = FeedbackLink::install(&feedback, StaticPage::new(NodeTree::new(), location));
    println!("{}", link.to_html());
    Ok(())
}
