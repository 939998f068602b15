//! Render a single Markdown file.

use super::load_optional_config;
use anyhow::{Context, Result};
use folio_core::MarkdownProcessor;
use std::fs;
use std::path::Path;

pub fn render_file(config_path: &Path, file: &Path, toc: bool, json: bool) -> Result<()> {
    let markdown_config = load_optional_config(config_path)?
        .map(|config| config.markdown)
        .unwrap_or_default();

    let source =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let page = MarkdownProcessor::new(&markdown_config).render(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if toc {
        if let Some(toc_html) = &page.toc_html {
            println!("{}", toc_html);
        }
    }
    print!("{}", page.html);
    Ok(())
}
