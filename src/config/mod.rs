//! Configuration management for txtread

pub mod progress;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ReaderError;
use crate::theme::Theme;

/// Application configuration, built once at startup and shared by reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override for the directory holding everything the reader writes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Dictionary lookup URL, `{}` is replaced by the clipboard text
    pub dictionary_url: String,

    /// Book catalog search URL, `{}` is replaced by the escaped clipboard text
    pub catalog_url: String,

    /// Editor used for notes (falls back to $EDITOR, then vim)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Write progress when quitting
    pub save_on_exit: bool,

    /// Start in line-by-line navigation
    pub line_by_line: bool,

    /// Show the status bar at startup
    pub status_bar: bool,

    /// Show lines to the next percentage point at startup
    pub percentage_points: bool,

    /// Custom colours (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            dictionary_url: "https://dle.rae.es/{}".to_string(),
            catalog_url: "https://www.goodreads.com/search?q={}".to_string(),
            editor: None,
            save_on_exit: false,
            line_by_line: false,
            status_bar: true,
            percentage_points: false,
            custom_theme: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, creating it when missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "txtread").ok_or(ReaderError::NoDataDirectory)?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let proj_dirs = ProjectDirs::from("", "", "txtread").ok_or(ReaderError::NoDataDirectory)?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Directory of per-document progress files
    pub fn progress_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("progress"))
    }

    /// Directory of per-document word lists
    pub fn words_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("words"))
    }

    /// Directory of per-document notes
    pub fn notes_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("notes"))
    }

    /// Directory of per-document quote collections
    pub fn quotes_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("quotes"))
    }

    /// Words never offered as references, shared by every document
    pub fn non_refs_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("non-refs.txt"))
    }

    /// Path of the log file
    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("txtread.log"))
    }

    /// Create every directory the reader writes into
    pub fn ensure_dirs(&self) -> Result<()> {
        let dirs = [self.progress_dir()?, self.words_dir()?, self.notes_dir()?, self.quotes_dir()?];
        for dir in dirs {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create data directory {:?}", dir))?;
        }
        Ok(())
    }

    /// Editor command for notes
    pub fn editor_command(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| "vim".to_string())
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme.clone().unwrap_or_default()
    }
}
