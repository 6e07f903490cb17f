//! Key bindings
//!
//! Physical keys are bound per mode, since the same key means different
//! things in the goto dialog and in the reading view.

use crossterm::event::KeyCode;

use crate::reader::Mode;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Dialogs
    Cancel,
    Confirm,
    Input(char),
    Erase,

    // Modes
    Help,
    Goto,
    WordBuilding,
    ViewWords,
    References,
    Stats,

    // Display
    ToggleStatusBar,
    TogglePercentagePoints,
    ToggleNavMode,

    // Collaborators
    SaveProgress,
    AddNotes,
    OpenDictionarySearch,
    OpenCatalogSearch,
    CopyWord,
    SaveQuote,
}

/// Map a key to an action for the active mode
pub fn key_to_action(mode: Mode, key: KeyCode) -> Option<Action> {
    match mode {
        Mode::Reading => reading_key(key),
        Mode::Help => match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::Char('H') => {
                Some(Action::Cancel)
            }
            _ => None,
        },
        Mode::Goto => match key {
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Backspace => Some(Action::Erase),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Mode::WordBuilding => match key {
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::CopyWord),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
            _ => None,
        },
        Mode::ViewWords => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::Left | KeyCode::PageUp => Some(Action::Left),
            KeyCode::Right | KeyCode::PageDown => Some(Action::Right),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
            _ => None,
        },
        Mode::References => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
            KeyCode::Left | KeyCode::PageUp => Some(Action::Left),
            KeyCode::Right | KeyCode::PageDown => Some(Action::Right),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
            _ => None,
        },
        // Any key leaves the statistics screen
        Mode::Stats => Some(Action::Cancel),
    }
}

fn reading_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Home => Some(Action::Home),
        KeyCode::End => Some(Action::End),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Action::Goto),
        KeyCode::Char('.') => Some(Action::ToggleStatusBar),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::TogglePercentagePoints),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::ToggleNavMode),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::SaveProgress),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::AddNotes),
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::OpenDictionarySearch),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::OpenCatalogSearch),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::WordBuilding),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(Action::ViewWords),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Stats),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(Action::References),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::SaveQuote),
        _ => None,
    }
}

/// Key binding descriptions for the help overlay
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("j / Down", "Go down"),
    ("k / Up", "Go up"),
    ("Home / End", "Start / end of the book"),
    ("g", "Go to line"),
    ("l", "Toggle page / line-by-line navigation"),
    (".", "Toggle status bar"),
    ("p", "Toggle lines to next percentage point"),
    ("s", "Save progress"),
    ("n", "Edit notes for this book"),
    ("w", "Pick a word from the highlighted line"),
    ("v", "View saved words"),
    ("f", "Browse names referenced in the book"),
    ("a", "Save the clipboard as a quote"),
    ("m", "Reading statistics"),
    ("o", "Dictionary search with the clipboard"),
    ("r", "Catalog search with the clipboard"),
    ("h / ?", "Show this help"),
    ("Esc / q", "Close dialogs / quit"),
];
