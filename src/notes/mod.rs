//! Per-document notes and quotes files
//!
//! Notes are free text owned by the user's editor; the reader only decides
//! where the file lives and launches the editor on it.

pub mod quotes;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, bail};

pub use quotes::{QuotesFile, normalize_quote};

/// Notes file for a single document
#[derive(Debug, Clone)]
pub struct NotesFile {
    path: PathBuf,
}

impl NotesFile {
    /// Notes for `document` inside `dir`, named after its base file name
    pub fn for_document(dir: &Path, document: &Path) -> Self {
        Self { path: document_file(dir, document) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file (and its directory) if missing so editors open it cleanly
    pub fn ensure_exists(&self) -> Result<()> {
        ensure_file(&self.path)
    }

    /// Run `editor` on the notes file and wait for it to exit
    pub fn edit(&self, editor: &str) -> Result<ExitStatus> {
        self.ensure_exists()?;
        tracing::info!(editor, path = %self.path.display(), "opening notes");
        run_editor(editor, &self.path)
    }
}

/// File named after the document's base name inside `dir`
pub(crate) fn document_file(dir: &Path, document: &Path) -> PathBuf {
    let base_name =
        document.file_name().map(PathBuf::from).unwrap_or_else(|| document.to_path_buf());
    dir.join(base_name)
}

pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to create {:?}", path))?;
    Ok(())
}

/// Launch `editor` on `file` and wait for it
pub(crate) fn run_editor(editor: &str, file: &Path) -> Result<ExitStatus> {
    let mut command = editor_command(editor, file)?;
    command.status().with_context(|| format!("Failed to launch editor {editor:?}"))
}

/// Build the editor invocation; `editor` may carry its own arguments
pub fn editor_command(editor: &str, file: &Path) -> Result<Command> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("No editor configured");
    };
    let mut command = Command::new(program);
    command.args(parts).arg(file);
    Ok(command)
}
