//! Lint command implementation.

use anyhow::{bail, Context, Result};
use folio_core::lint::{format_report, lint_naked_urls, NakedUrl};
use folio_core::Config;
use serde::Serialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Serialize)]
struct LintSummary<'a> {
    files: usize,
    findings: &'a [NakedUrl],
}

/// Check every Markdown file under the input directory for naked URLs.
pub fn lint_manuscript(config_path: &Path, deny: bool, json: bool) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    let input_dir = config.input_dir();
    tracing::info!("Linting {:?}", input_dir);

    let mut files = 0;
    let mut findings = Vec::new();

    let mut entries: Vec<_> = WalkDir::new(&input_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    entries.sort();

    for path in entries {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::debug!("Skipping unreadable {:?}: {}", path, err);
                continue;
            }
        };
        let rel = path.strip_prefix(&input_dir).unwrap_or(path.as_path());
        let found = lint_naked_urls(rel, &content);
        files += 1;
        if !found.is_empty() && !json {
            tracing::warn!("{}", format_report(rel, &found));
        }
        findings.extend(found);
    }

    if json {
        let summary = LintSummary {
            files,
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Lint complete: {} files, {} naked URLs",
            files,
            findings.len()
        );
    }

    if deny && !findings.is_empty() {
        bail!("{} naked URLs found", findings.len());
    }
    Ok(())
}
