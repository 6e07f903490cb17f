//! Reading progress persistence
//!
//! One file per document, named after the document's base file name, holding
//! the single record `absolute_path|from_line|to_line`.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Number of pipe-delimited fields in a progress file
const RECORD_FIELDS: usize = 3;

/// Saved window for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    /// Absolute path of the document
    pub path: PathBuf,
    /// First line of the saved window
    pub from_line: usize,
    /// End of the saved window (exclusive)
    pub to_line: usize,
}

impl ProgressRecord {
    pub fn new(path: impl Into<PathBuf>, from_line: usize, to_line: usize) -> Self {
        Self { path: path.into(), from_line, to_line }
    }

    /// Parse the on-disk form, rejecting anything but exactly three fields
    pub fn parse(text: &str) -> Option<Self> {
        let fields: Vec<&str> = text.trim_end_matches(['\n', '\r']).split('|').collect();
        if fields.len() != RECORD_FIELDS {
            return None;
        }
        let from_line = fields[1].trim().parse().ok()?;
        let to_line = fields[2].trim().parse().ok()?;
        Some(Self::new(fields[0], from_line, to_line))
    }
}

impl fmt::Display for ProgressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.path.display(), self.from_line, self.to_line)
    }
}

/// Directory of progress files
#[derive(Debug, Clone)]
pub struct ProgressStore {
    dir: PathBuf,
}

impl ProgressStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Progress file for a document, keyed by its base file name
    pub fn record_path(&self, document: &Path) -> PathBuf {
        let base_name =
            document.file_name().map(PathBuf::from).unwrap_or_else(|| document.to_path_buf());
        self.dir.join(base_name)
    }

    /// Load saved progress; anything missing or malformed counts as none
    pub fn load(&self, document: &Path) -> Option<ProgressRecord> {
        let path = self.record_path(document);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!("No progress at {}: {}", path.display(), e);
                return None;
            }
        };

        let record = ProgressRecord::parse(&contents);
        if record.is_none() {
            tracing::debug!("Ignoring malformed progress file {}", path.display());
        }
        record
    }

    /// Save progress to disk
    pub fn save(&self, record: &ProgressRecord) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create progress directory {:?}", self.dir))?;

        let path = self.record_path(&record.path);
        std::fs::write(&path, record.to_string())
            .with_context(|| format!("Failed to write progress to {:?}", path))?;

        tracing::info!(from = record.from_line, to = record.to_line, "progress saved");
        Ok(path)
    }
}
