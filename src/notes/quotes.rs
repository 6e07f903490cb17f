//! Quotes copied out of the document
//!
//! Each quote is taken from the clipboard, tidied and appended to the
//! document's quotes file under a separator line.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use super::{document_file, ensure_file, run_editor};

/// Line written before every quote
pub const QUOTE_SEPARATOR: &str = "__________";

static SPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());

/// Trim every line, drop blank ones and collapse runs of spaces or tabs
pub fn normalize_quote(text: &str) -> String {
    let joined = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    SPACE_RUN_RE.replace_all(&joined, " ").into_owned()
}

#[derive(Debug, Clone)]
pub struct QuotesFile {
    path: PathBuf,
}

impl QuotesFile {
    pub fn for_document(dir: &Path, document: &Path) -> Self {
        Self { path: document_file(dir, document) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `quote` after a separator line
    pub fn append(&self, quote: &str) -> Result<()> {
        ensure_file(&self.path)?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open quotes file {:?}", self.path))?;
        write!(file, "\n{QUOTE_SEPARATOR}\n{quote}")
            .with_context(|| format!("Failed to write quotes file {:?}", self.path))?;
        tracing::info!(path = %self.path.display(), chars = quote.chars().count(), "quote saved");
        Ok(())
    }

    /// Open the quotes file in `editor`
    pub fn edit(&self, editor: &str) -> Result<ExitStatus> {
        ensure_file(&self.path)?;
        tracing::info!(editor, path = %self.path.display(), "opening quotes");
        run_editor(editor, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_drops_blank_lines_and_indentation() {
        let text = "\n   Call me Ishmael.  \n\n\t Some years ago\n  \n";
        assert_eq!(normalize_quote(text), "Call me Ishmael.\nSome years ago");
    }

    #[test]
    fn normalize_collapses_inner_space_runs() {
        assert_eq!(normalize_quote("never  mind\t\thow long"), "never mind how long");
        assert_eq!(normalize_quote("one space stays"), "one space stays");
    }

    #[test]
    fn normalize_blank_text_is_empty() {
        assert_eq!(normalize_quote(" \n\t\n"), "");
    }

    #[test]
    fn quotes_are_appended_under_separators() {
        let dir = tempfile::tempdir().unwrap();
        let quotes = QuotesFile::for_document(&dir.path().join("quotes"), Path::new("/b/moby.txt"));
        assert_eq!(quotes.path(), dir.path().join("quotes").join("moby.txt"));

        quotes.append("Call me Ishmael.").unwrap();
        quotes.append("It is a way I have").unwrap();

        assert_eq!(
            std::fs::read_to_string(quotes.path()).unwrap(),
            "\n__________\nCall me Ishmael.\n__________\nIt is a way I have"
        );
    }

    #[test]
    fn edit_with_missing_editor_still_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let quotes = QuotesFile::for_document(dir.path(), Path::new("moby.txt"));
        assert!(quotes.edit("txtread-no-such-editor-binary").is_err());
        assert!(quotes.path().exists());
    }
}
