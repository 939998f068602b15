//! CLI command implementations.

pub mod feedback;
pub mod leanpub;
pub mod lint;
pub mod render;

pub use feedback::{file_issue, print_widget, FileIssueOptions};
pub use leanpub::leanpub;
pub use lint::lint_manuscript;
pub use render::render_file;

use anyhow::{Context, Result};
use folio_core::Config;
use std::path::Path;

/// Load the config file, or `None` when it does not exist
pub(crate) fn load_optional_config(config_path: &Path) -> Result<Option<Config>> {
    if !config_path.exists() {
        tracing::debug!("No config at {:?}; using defaults", config_path);
        return Ok(None);
    }
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    Ok(Some(config))
}
