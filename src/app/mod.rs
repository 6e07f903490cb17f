//! Application driver: terminal setup, the event loop and effect handling

pub mod controller;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::process::ExitStatus;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::book::Document;
use crate::config::Config;
use crate::config::progress::ProgressStore;
use crate::external::{self, SearchTarget};
use crate::notes::{NotesFile, QuotesFile, normalize_quote};
use crate::theme::Theme;
use crate::ui;
use crate::words::{WordList, collect_references};
use controller::Effect;
use input::key_to_action;
use state::AppState;

/// Terminal rows left for the page once the status line is reserved
pub fn viewport_size(columns: u16, rows: u16) -> (usize, usize) {
    ((rows as usize).saturating_sub(1).max(1), columns as usize)
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Colours resolved from the configuration
    theme: Theme,

    /// Current application state
    state: AppState,

    progress: ProgressStore,
    words: WordList,
    notes: NotesFile,
    quotes: QuotesFile,

    /// Words never offered as references
    non_refs: WordList,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance for `document`, resuming saved progress
    pub fn new(config: Config, document: Document) -> Result<Self> {
        let progress = ProgressStore::new(config.progress_dir()?);
        let words = WordList::for_document(&config.words_dir()?, document.path());
        let notes = NotesFile::for_document(&config.notes_dir()?, document.path());
        let quotes = QuotesFile::for_document(&config.quotes_dir()?, document.path());
        let non_refs = WordList::new(config.non_refs_path()?);

        let (columns, rows) = crossterm::terminal::size().context("Failed to read terminal size")?;
        let (height, width) = viewport_size(columns, rows);

        let mut state = AppState::new(document, height, width, &config);
        if let Some(record) = progress.load(state.document.path()) {
            state.restore_progress(&record);
        }
        match words.read() {
            Ok(saved) => state.saved_words = saved.len(),
            Err(e) => tracing::warn!("Could not read word list: {:#}", e),
        }

        let terminal = Self::setup_terminal()?;
        let theme = config.active_theme();
        Ok(Self { config, theme, state, progress, words, notes, quotes, non_refs, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Take the terminal back after an external program used it
    fn resume_terminal(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.theme);
            })?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = key_to_action(self.state.nav.mode, key.code) else {
                        continue;
                    };
                    let Some(effect) = self.state.handle_action(action) else {
                        continue;
                    };
                    if effect == Effect::Quit {
                        self.quit();
                        break;
                    }
                    if let Err(e) = self.apply(effect) {
                        tracing::warn!("{:#}", e);
                        self.state.set_error(e.to_string());
                    }
                }
                Event::Resize(columns, rows) => {
                    let (height, width) = viewport_size(columns, rows);
                    self.state.nav.resize(height, width);
                }
                _ => {}
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    fn quit(&mut self) {
        if self.config.save_on_exit {
            if let Err(e) = self.progress.save(&self.state.progress_record()) {
                tracing::error!("Failed to save progress on exit: {:#}", e);
            }
        }
        tracing::info!(
            path = %self.state.nav.source().display(),
            line = self.state.nav.line_number,
            "session closed"
        );
    }

    /// Carry out a side effect requested by the controller
    fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::Quit => {}
            Effect::SaveProgress => {
                self.progress.save(&self.state.progress_record())?;
                let name = self.state.document.base_name();
                self.state.set_message(format!("Status saved for: '{name}'"));
            }
            Effect::EditNotes => self.edit_notes()?,
            Effect::Search(target) => self.search(target)?,
            Effect::SaveWord(word) => {
                if self.words.contains(&word)? {
                    self.state.set_message(format!("'{word}' is already saved"));
                } else {
                    self.words.append(&word)?;
                    self.state.saved_words += 1;
                    self.state.set_message(format!("Saved '{word}'"));
                }
            }
            Effect::CopyWord(word) => {
                external::copy_to_clipboard(&word)?;
                self.state.set_message(format!("Copied '{word}'"));
            }
            Effect::LoadWords => {
                let saved = self.words.read()?;
                self.state.saved_words = saved.len();
                self.state.enter_view_words(saved);
            }
            Effect::LoadReferences => {
                let banned = self.non_refs.read()?;
                let references = collect_references(self.state.document.lines(), &banned);
                tracing::debug!(
                    found = references.len(),
                    banned = banned.len(),
                    "references gathered"
                );
                self.state.enter_references(references);
            }
            Effect::BanReference(word) => {
                if !self.non_refs.contains(&word)? {
                    self.non_refs.append(&word)?;
                }
                self.state.set_message(format!("'{word}' will not be listed again"));
            }
            Effect::SaveQuote => self.save_quote()?,
        }
        Ok(())
    }

    fn save_quote(&mut self) -> Result<()> {
        let quote = normalize_quote(&external::read_clipboard()?);
        if quote.is_empty() {
            self.state.set_message("Clipboard is empty, no quote saved");
            return Ok(());
        }
        self.quotes.append(&quote)?;

        let editor = self.config.editor_command();
        self.restore_terminal()?;
        let result = self.quotes.edit(&editor);
        self.resume_terminal()?;
        self.check_editor_status(&editor, result)
    }

    fn edit_notes(&mut self) -> Result<()> {
        let editor = self.config.editor_command();
        self.restore_terminal()?;
        let result = self.notes.edit(&editor);
        self.resume_terminal()?;
        self.check_editor_status(&editor, result)
    }

    fn check_editor_status(&mut self, editor: &str, result: Result<ExitStatus>) -> Result<()> {
        let status = result?;
        if !status.success() {
            tracing::warn!(%status, editor = %editor, "editor exited with failure");
            self.state.set_error(format!("{editor} exited with {status}"));
        }
        Ok(())
    }

    fn search(&mut self, target: SearchTarget) -> Result<()> {
        let template = match target {
            SearchTarget::Dictionary => &self.config.dictionary_url,
            SearchTarget::Catalog => &self.config.catalog_url,
        };
        if let Some(url) = external::search_clipboard(template, target)? {
            self.state.set_message(format!("Opened {url}"));
        }
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_takes_one_row() {
        assert_eq!(viewport_size(80, 24), (23, 80));
    }

    #[test]
    fn tiny_terminal_keeps_one_page_row() {
        assert_eq!(viewport_size(10, 1), (1, 10));
        assert_eq!(viewport_size(10, 0), (1, 10));
    }
}
