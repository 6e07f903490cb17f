//! Application state definitions

use std::time::Instant;

use crate::book::Document;
use crate::config::Config;
use crate::config::progress::ProgressRecord;
use crate::reader::{NavigationPolicy, NavigationState, parse_goto_target};
use crate::stats::ReadingStats;
use crate::words::{WordsPager, extract_words, sanitize_word};

/// Rows an overlay list loses to its border and hint line
const OVERLAY_CHROME_ROWS: usize = 4;

/// State for the go-to-line dialog
#[derive(Debug, Clone, Default)]
pub struct GotoState {
    /// Text typed so far
    pub input: String,
}

impl GotoState {
    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Target line typed so far, if any digits were entered
    pub fn target(&self) -> Option<usize> {
        parse_goto_target(&self.input)
    }
}

/// State for picking a word out of the highlighted line
#[derive(Debug, Clone, Default)]
pub struct WordBuildingState {
    /// Words of the highlighted line as they appear in the text
    pub words: Vec<String>,
    /// Index of the selected word
    pub selected: usize,
}

impl WordBuildingState {
    pub fn new(line: &str) -> Self {
        Self { words: extract_words(line), selected: 0 }
    }

    /// Select the previous word, wrapping to the last
    pub fn move_left(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.words.len() - 1);
    }

    /// Select the next word, wrapping to the first
    pub fn move_right(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.words.len();
    }

    /// The selected word with punctuation removed
    pub fn selected_word(&self) -> Option<String> {
        self.words.get(self.selected).map(|w| sanitize_word(w)).filter(|w| !w.is_empty())
    }
}

/// Transient message shown in the status bar until the next key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// The document being read
    pub document: Document,

    /// Window, highlight and mode
    pub nav: NavigationState,

    /// Go-to-line dialog state
    pub goto: GotoState,

    /// Word picking state
    pub word_building: WordBuildingState,

    /// Saved word browser
    pub words_view: WordsPager,

    /// Proper-noun references found in the document
    pub references: WordsPager,

    /// Session statistics
    pub stats: ReadingStats,

    /// Number of words in the document's word list
    pub saved_words: usize,

    /// Status bar message
    pub message: Option<StatusMessage>,
}

impl AppState {
    /// Set up a session over `document` for a viewport of the given size
    pub fn new(
        document: Document,
        viewport_height: usize,
        viewport_width: usize,
        config: &Config,
    ) -> Self {
        let mut nav = NavigationState::new(
            document.len(),
            viewport_height,
            viewport_width,
            document.path(),
        );
        nav.show_status_bar = config.status_bar;
        nav.show_percentage_points = config.percentage_points;
        if config.line_by_line {
            nav.policy = NavigationPolicy::LineByLine;
        }

        let stats = ReadingStats::new(nav.line_number, document.len(), Instant::now());
        Self {
            document,
            nav,
            goto: GotoState::default(),
            word_building: WordBuildingState::default(),
            words_view: WordsPager::new(Vec::new(), 1),
            references: WordsPager::new(Vec::new(), 1),
            stats,
            saved_words: 0,
            message: None,
        }
    }

    /// Resume from saved progress
    pub fn restore_progress(&mut self, record: &ProgressRecord) {
        self.nav.restore(record.from_line);
        self.stats = ReadingStats::new(self.nav.line_number, self.document.len(), Instant::now());
        tracing::info!(from = record.from_line, line = self.nav.line_number, "progress restored");
    }

    /// Progress record for the current window
    pub fn progress_record(&self) -> ProgressRecord {
        ProgressRecord::new(self.document.absolute_path(), self.nav.from_line, self.nav.to_line)
    }

    /// Lines visible in the window, never more than the viewport holds
    pub fn current_page(&self) -> &[String] {
        let page = self.document.chunk(self.nav.from_line, self.nav.to_line);
        &page[..page.len().min(self.nav.viewport_height)]
    }

    /// Text of the highlighted line
    pub fn highlighted_line(&self) -> Option<&str> {
        self.nav.highlighted_index().and_then(|i| self.document.line(i))
    }

    /// Entries per page in the word and reference browsers
    pub fn words_page_size(&self) -> usize {
        self.nav.viewport_height.saturating_sub(OVERLAY_CHROME_ROWS).max(1)
    }

    /// Record the position for statistics after a transition
    pub fn observe_position(&mut self) {
        self.stats.observe(self.nav.line_number, self.document.len(), Instant::now());
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(StatusMessage { text: msg.into(), is_error: false });
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(StatusMessage { text: msg.into(), is_error: true });
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
