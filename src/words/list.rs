//! Append-only word list file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One word per line
#[derive(Debug, Clone)]
pub struct WordList {
    path: PathBuf,
}

impl WordList {
    /// Word list stored at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Word list for `document` inside `dir`
    pub fn for_document(dir: &Path, document: &Path) -> Self {
        let base_name =
            document.file_name().map(PathBuf::from).unwrap_or_else(|| document.to_path_buf());
        Self { path: dir.join(base_name) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all saved words in order; a missing file is an empty list
    pub fn read(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read word list from {:?}", self.path))?;
        Ok(contents.lines().filter(|l| !l.trim().is_empty()).map(str::to_string).collect())
    }

    /// Whether the word is already saved
    pub fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.read()?.iter().any(|w| w == word))
    }

    /// Append a word followed by a newline
    pub fn append(&self, word: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open word list {:?}", self.path))?;
        writeln!(file, "{word}")
            .with_context(|| format!("Failed to append to word list {:?}", self.path))?;

        tracing::info!(word, path = %self.path.display(), "word saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_list_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = WordList::for_document(dir.path(), Path::new("/books/dune.txt"));
        assert!(list.read().unwrap().is_empty());
        assert!(!list.contains("spice").unwrap());
    }

    #[test]
    fn append_keeps_order_and_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let list = WordList::for_document(&dir.path().join("words"), Path::new("dune.txt"));

        list.append("spice").unwrap();
        list.append("melange").unwrap();

        assert_eq!(list.read().unwrap(), vec!["spice", "melange"]);
        assert_eq!(std::fs::read_to_string(list.path()).unwrap(), "spice\nmelange\n");
        assert!(list.contains("melange").unwrap());
    }

    #[test]
    fn list_is_named_after_document() {
        let list = WordList::for_document(Path::new("/data/words"), Path::new("/a/b/dune.txt"));
        assert_eq!(list.path(), Path::new("/data/words/dune.txt"));
    }

    #[test]
    fn shared_list_lives_at_given_path() {
        let dir = tempfile::tempdir().unwrap();
        let list = WordList::new(dir.path().join("data").join("non-refs.txt"));

        list.append("The").unwrap();
        assert!(list.contains("The").unwrap());
        assert_eq!(std::fs::read_to_string(dir.path().join("data/non-refs.txt")).unwrap(), "The\n");
    }
}
