//! Rewrite manuscript files in place for Leanpub, which does not know the
//! site's custom fence languages.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File listing the chapters of the book, one per line
pub const BOOK_FILE: &str = "Book.txt";

#[derive(Error, Debug)]
pub enum LeanpubError {
    #[error("Failed to read book listing {path}: {source}")]
    BookListing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to convert {path}: {source}")]
    Chapter {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of converting one chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedChapter {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Apply every conversion, in order, to each line of `text`.
///
/// Returns the new text and how many replacements were made.
pub fn convert_text(text: &str, conversions: &[(String, String)]) -> (String, usize) {
    let mut count = 0;
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let mut line = line.to_string();
        for (from, to) in conversions {
            if from.is_empty() {
                continue;
            }
            let hits = line.matches(from.as_str()).count();
            if hits > 0 {
                count += hits;
                line = line.replace(from.as_str(), to);
            }
        }
        out.push_str(&line);
    }
    (out, count)
}

/// Chapter files named in `<manuscript>/Book.txt`
pub fn book_chapters(manuscript: &Path) -> Result<Vec<PathBuf>, LeanpubError> {
    let listing = manuscript.join(BOOK_FILE);
    let contents = fs::read_to_string(&listing).map_err(|source| LeanpubError::BookListing {
        path: listing.clone(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| manuscript.join(line))
        .collect())
}

/// Convert every chapter listed in the manuscript's `Book.txt` in place
pub fn convert_manuscript(
    manuscript: &Path,
    conversions: &[(String, String)],
) -> Result<Vec<ConvertedChapter>, LeanpubError> {
    if conversions.is_empty() {
        tracing::info!("No Leanpub conversions configured");
        return Ok(Vec::new());
    }

    let mut converted = Vec::new();
    for path in book_chapters(manuscript)? {
        let chapter_error = |source| LeanpubError::Chapter {
            path: path.clone(),
            source,
        };
        let text = fs::read_to_string(&path).map_err(chapter_error)?;
        let (new_text, replacements) = convert_text(&text, conversions);
        if replacements > 0 {
            fs::write(&path, new_text).map_err(chapter_error)?;
        }
        tracing::debug!(path = %path.display(), replacements, "converted chapter");
        converted.push(ConvertedChapter { path, replacements });
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dom_tree() -> Vec<(String, String)> {
        vec![("```dom-tree".to_string(), "```".to_string())]
    }

    #[test]
    fn test_convert_text() {
        let text = "Intro\n```dom-tree\n<html>\n```\n";
        let (out, count) = convert_text(text, &dom_tree());
        assert_eq!(out, "Intro\n```\n<html>\n```\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_conversions_apply_in_order() {
        let conversions = vec![
            ("a".to_string(), "b".to_string()),
            ("b".to_string(), "c".to_string()),
        ];
        let (out, count) = convert_text("ab", &conversions);
        assert_eq!(out, "cc");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_convert_manuscript() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(BOOK_FILE), "one.md\n\ntwo.md\n").unwrap();
        fs::write(root.join("one.md"), "```dom-tree\nx\n```\n").unwrap();
        fs::write(root.join("two.md"), "no fences\n").unwrap();

        let converted = convert_manuscript(root, &dom_tree()).unwrap();
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].replacements, 1);
        assert_eq!(converted[1].replacements, 0);
        assert_eq!(
            fs::read_to_string(root.join("one.md")).unwrap(),
            "```\nx\n```\n"
        );
    }

    #[test]
    fn test_missing_book_listing() {
        let dir = tempdir().unwrap();
        let err = convert_manuscript(dir.path(), &dom_tree()).unwrap_err();
        assert!(matches!(err, LeanpubError::BookListing { .. }));
    }

    #[test]
    fn test_missing_chapter() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(BOOK_FILE), "ghost.md\n").unwrap();
        let err = convert_manuscript(dir.path(), &dom_tree()).unwrap_err();
        assert!(matches!(err, LeanpubError::Chapter { .. }));
        assert!(err.to_string().contains("ghost.md"));
    }
}
