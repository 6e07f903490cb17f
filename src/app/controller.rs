//! Mode controller
//!
//! One dispatch point per mode. Handlers only touch [`AppState`]; anything
//! that needs the filesystem, clipboard or another process is returned as an
//! [`Effect`] for the driver to carry out.

use super::input::Action;
use super::state::{AppState, WordBuildingState};
use crate::external::SearchTarget;
use crate::reader::Mode;
use crate::words::WordsPager;

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the reader
    Quit,
    /// Write the progress record
    SaveProgress,
    /// Open the notes file in an editor
    EditNotes,
    /// Look up the clipboard contents
    Search(SearchTarget),
    /// Append a word to the word list
    SaveWord(String),
    /// Put a word on the clipboard
    CopyWord(String),
    /// Read the word list and show it
    LoadWords,
    /// Gather the document's references and show them
    LoadReferences,
    /// Never offer this reference again
    BanReference(String),
    /// Append the clipboard to the quotes file and open it
    SaveQuote,
}

impl AppState {
    /// Apply an action in the current mode
    pub fn handle_action(&mut self, action: Action) -> Option<Effect> {
        self.clear_message();
        let mode = self.nav.mode;
        let effect = match mode {
            Mode::Reading => self.handle_reading(action),
            Mode::Help => self.handle_help(action),
            Mode::Goto => self.handle_goto(action),
            Mode::WordBuilding => self.handle_word_building(action),
            Mode::ViewWords => self.handle_view_words(action),
            Mode::References => self.handle_references(action),
            Mode::Stats => self.handle_stats(action),
        };
        if self.nav.mode != mode {
            tracing::debug!(from = ?mode, to = ?self.nav.mode, "mode changed");
        }
        effect
    }

    /// Show the saved words loaded by the driver
    pub fn enter_view_words(&mut self, words: Vec<String>) {
        self.words_view = WordsPager::new(words, self.words_page_size());
        self.nav.mode = Mode::ViewWords;
    }

    /// Show the references gathered by the driver
    pub fn enter_references(&mut self, references: Vec<String>) {
        self.references = WordsPager::new(references, self.words_page_size());
        self.nav.mode = Mode::References;
    }

    fn handle_reading(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Down => {
                if self.nav.move_down() {
                    self.observe_position();
                }
            }
            Action::Up => {
                self.nav.move_up();
            }
            Action::Home => self.nav.go_start(),
            Action::End => {
                self.nav.go_end();
                self.observe_position();
            }
            Action::Cancel => return Some(Effect::Quit),
            Action::Help => self.nav.mode = Mode::Help,
            Action::Goto => {
                self.goto.clear();
                self.nav.mode = Mode::Goto;
            }
            Action::ToggleStatusBar => self.nav.toggle_status_bar(),
            Action::TogglePercentagePoints => self.nav.toggle_percentage_points(),
            Action::ToggleNavMode => self.nav.toggle_policy(),
            Action::SaveProgress => return Some(Effect::SaveProgress),
            Action::AddNotes => return Some(Effect::EditNotes),
            Action::OpenDictionarySearch => return Some(Effect::Search(SearchTarget::Dictionary)),
            Action::OpenCatalogSearch => return Some(Effect::Search(SearchTarget::Catalog)),
            Action::WordBuilding => {
                // Nothing to pick from on an empty page
                if self.current_page().is_empty() {
                    return None;
                }
                let line = self.highlighted_line().unwrap_or_default();
                self.word_building = WordBuildingState::new(line);
                self.nav.mode = Mode::WordBuilding;
            }
            Action::ViewWords => return Some(Effect::LoadWords),
            Action::References => return Some(Effect::LoadReferences),
            Action::SaveQuote => return Some(Effect::SaveQuote),
            Action::Stats => self.nav.mode = Mode::Stats,
            _ => {}
        }
        None
    }

    fn handle_help(&mut self, action: Action) -> Option<Effect> {
        if action == Action::Cancel {
            self.nav.mode = Mode::Reading;
        }
        None
    }

    fn handle_goto(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Input(c) => self.goto.push(c),
            Action::Erase => self.goto.backspace(),
            Action::Confirm => {
                if let Some(target) = self.goto.target() {
                    if self.nav.goto_line(target) {
                        self.observe_position();
                    }
                }
                self.goto.clear();
                self.nav.mode = Mode::Reading;
            }
            Action::Cancel => {
                self.goto.clear();
                self.nav.mode = Mode::Reading;
            }
            _ => {}
        }
        None
    }

    fn handle_word_building(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Left => self.word_building.move_left(),
            Action::Right => self.word_building.move_right(),
            Action::CopyWord => return self.word_building.selected_word().map(Effect::CopyWord),
            Action::Confirm => {
                self.nav.mode = Mode::Reading;
                return self.word_building.selected_word().map(Effect::SaveWord);
            }
            Action::Cancel => self.nav.mode = Mode::Reading,
            _ => {}
        }
        None
    }

    fn handle_view_words(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Up => self.words_view.move_up(),
            Action::Down => self.words_view.move_down(),
            Action::Left => self.words_view.previous_page(),
            Action::Right => self.words_view.next_page(),
            Action::Cancel => self.nav.mode = Mode::Reading,
            _ => {}
        }
        None
    }

    fn handle_references(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Up => self.references.move_up(),
            Action::Down => self.references.move_down(),
            Action::Left => self.references.previous_page(),
            Action::Right => self.references.next_page(),
            Action::Confirm => return self.references.remove_selected().map(Effect::BanReference),
            Action::Cancel => self.nav.mode = Mode::Reading,
            _ => {}
        }
        None
    }

    fn handle_stats(&mut self, _action: Action) -> Option<Effect> {
        self.nav.mode = Mode::Reading;
        None
    }
}
