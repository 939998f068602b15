//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the folio.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub leanpub: LeanpubConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
}

fn default_input() -> PathBuf {
    PathBuf::from("manuscript")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Pass raw HTML in the source through to the output
    #[serde(default = "default_true")]
    pub html: bool,

    /// Heading levels listed in the table of contents
    #[serde(default = "default_toc_levels")]
    pub toc_levels: Vec<u8>,
}

fn default_true() -> bool {
    true
}

fn default_toc_levels() -> Vec<u8> {
    vec![2, 3]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            html: true,
            toc_levels: default_toc_levels(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// New-issue endpoint of the issue tracker
    #[serde(default)]
    pub file_issue_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeanpubConfig {
    /// Literal (from, to) replacements applied to every manuscript line
    #[serde(default = "default_conversions")]
    pub conversions: Vec<(String, String)>,
}

fn default_conversions() -> Vec<(String, String)> {
    vec![("```dom-tree".to_string(), "```".to_string())]
}

impl Default for LeanpubConfig {
    fn default() -> Self {
        Self {
            conversions: default_conversions(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get the manuscript directory, resolved relative to config file
    pub fn input_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.input)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_deref().and_then(Path::parent) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_values() {
        let config = Config::from_yaml("site:\n  title: Test\n").unwrap();

        assert_eq!(config.paths.input, PathBuf::from("manuscript"));
        assert!(config.markdown.html);
        assert_eq!(config.markdown.toc_levels, vec![2, 3]);
        assert_eq!(config.feedback.file_issue_url, None);
        assert_eq!(
            config.leanpub.conversions,
            vec![("```dom-tree".to_string(), "```".to_string())]
        );
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
site:
  title: "The Book"
  url: "https://book.example"
paths:
  input: "src"
markdown:
  html: false
  toc_levels: [2]
feedback:
  file_issue_url: "https://github.com/o/r/issues/new"
leanpub:
  conversions:
    - ["```dom-tree", "```text"]
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("src"));
        assert_eq!(config.site.url.as_deref(), Some("https://book.example"));
        assert!(!config.markdown.html);
        assert_eq!(config.leanpub.conversions[0].1, "```text");
        assert_eq!(
            config.feedback.file_issue_url.as_deref(),
            Some("https://github.com/o/r/issues/new")
        );
    }

    #[test]
    fn test_unknown_path_keys_are_ignored() {
        let yaml = "site:\n  title: T\npaths:\n  input: src\n  output: out\n  includes: inc\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("src"));
    }

    #[test]
    fn test_paths_resolve_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.yml");
        std::fs::write(&path, "site:\n  title: T\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.input_dir(), dir.path().join("manuscript"));

        let mut absolute = Config::from_yaml("site:\n  title: T\n").unwrap();
        absolute.paths.input = dir.path().join("elsewhere");
        assert_eq!(absolute.input_dir(), dir.path().join("elsewhere"));
    }

    #[test]
    fn test_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "site: [unclosed").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let err = Config::from_file("/definitely/not/here/folio.yml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
