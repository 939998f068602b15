//! Leanpub export command.

use anyhow::{Context, Result};
use folio_core::{convert_manuscript, Config};
use std::path::Path;

/// Rewrite the chapters listed in Book.txt using the configured conversions
pub fn leanpub(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    let manuscript = config.input_dir();
    tracing::info!("Converting manuscript in {:?} for Leanpub", manuscript);

    let converted = convert_manuscript(&manuscript, &config.leanpub.conversions)
        .context("Leanpub conversion failed")?;

    let total: usize = converted.iter().map(|c| c.replacements).sum();
    for chapter in converted.iter().filter(|c| c.replacements > 0) {
        println!("{}: {} replacements", chapter.path.display(), chapter.replacements);
    }
    println!(
        "Converted {} chapters ({} replacements)",
        converted.len(),
        total
    );
    Ok(())
}
