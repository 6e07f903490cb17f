//! Documents and page windowing
//!
//! A document is loaded once, split into lines and never mutated afterwards.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ReaderError;

/// The lines of a plain-text file, trailing newlines stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Read a document from disk.
    ///
    /// Invalid UTF-8 is replaced rather than rejected so that any text file
    /// can be paged.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ReaderError::DocumentNotFound(path.to_path_buf())
            } else {
                ReaderError::DocumentUnreadable { path: path.to_path_buf(), source }
            }
        })?;

        let text = String::from_utf8_lossy(&bytes);
        let document = Self::from_text(path, &text);
        tracing::info!(path = %path.display(), lines = document.len(), "document loaded");
        Ok(document)
    }

    /// Build a document from text already in memory
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self { path: path.into(), lines: text.lines().map(str::to_string).collect() }
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories, used to name per-document files
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Absolute form of the document path, falling back to the path as given
    pub fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of whitespace-separated words in the whole document
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|line| line.split_whitespace().count()).sum()
    }

    /// Lines of the window `[from_line, to_line)`
    pub fn chunk(&self, from_line: usize, to_line: usize) -> &[String] {
        book_chunk(&self.lines, from_line, to_line)
    }
}

/// Slice `lines[from_line..to_line]`, clipped to the sequence.
///
/// A start past the end yields an empty page and an end past the end
/// truncates, the same way a pager shows the tail of a book.
pub fn book_chunk<T>(lines: &[T], from_line: usize, to_line: usize) -> &[T] {
    let end = to_line.min(lines.len());
    let start = from_line.min(end);
    &lines[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|n| format!("line {n}")).collect()
    }

    #[test]
    fn chunk_within_bounds() {
        let lines = numbered(10);
        assert_eq!(book_chunk(&lines, 2, 5), &lines[2..5]);
    }

    #[test]
    fn chunk_clipped_at_document_end() {
        let lines = numbered(10);
        assert_eq!(book_chunk(&lines, 8, 20).len(), 2);
    }

    #[test]
    fn chunk_past_document_end_is_empty() {
        let lines = numbered(10);
        assert!(book_chunk(&lines, 15, 25).is_empty());
    }

    #[test]
    fn chunk_with_inverted_bounds_is_empty() {
        let lines = numbered(10);
        assert!(book_chunk(&lines, 6, 3).is_empty());
    }

    #[test]
    fn from_text_strips_newlines() {
        let doc = Document::from_text("book.txt", "first\nsecond\r\n\nlast\n");
        assert_eq!(doc.lines(), &["first", "second", "", "last"]);
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.line(3), Some("last"));
        assert_eq!(doc.line(4), None);
    }

    #[test]
    fn word_count_ignores_blank_lines() {
        let doc = Document::from_text("book.txt", "one two\n\n  three  \n");
        assert_eq!(doc.word_count(), 3);
    }

    #[test]
    fn base_name_drops_directories() {
        let doc = Document::from_text("/tmp/books/moby dick.txt", "");
        assert_eq!(doc.base_name(), "moby dick.txt");
        assert!(doc.is_empty());
    }

    #[test]
    fn open_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "alpha\nbeta\n").unwrap();

        let doc = Document::open(file.path()).unwrap();
        assert_eq!(doc.lines(), &["alpha", "beta"]);
        assert_eq!(doc.path(), file.path());
    }

    #[test]
    fn open_missing_file_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = Document::open(&missing).unwrap_err();
        assert!(matches!(err, ReaderError::DocumentNotFound(ref p) if p == &missing));
        assert!(err.to_string().contains("nope.txt"));
    }
}
