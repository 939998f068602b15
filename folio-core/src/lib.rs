//! # folio-core
//!
//! Core library for the folio book tooling.
//!
//! This crate renders manuscript Markdown, lints it, prepares it for
//! Leanpub, and builds the prefilled issue links behind the
//! "send feedback about the selected text" button.

pub mod config;
pub mod feedback;
pub mod leanpub;
pub mod lint;
pub mod markdown;
pub mod slug;
pub mod uri;

pub use config::{Config, ConfigError, FeedbackConfig, LeanpubConfig, MarkdownConfig};
pub use feedback::{escape_markup, resolve_filing_url, FeedbackLink, NodeTree, StaticPage};
pub use leanpub::{convert_manuscript, LeanpubError};
pub use lint::{lint_naked_urls, NakedUrl};
pub use markdown::{Heading, MarkdownProcessor, RenderedPage};
pub use slug::{ref_link, slugify};
pub use uri::encode_uri_component;
