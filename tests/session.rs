//! End-to-end reading sessions driven through the library API

use std::path::Path;

use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;
use txtread::app::controller::Effect;
use txtread::app::input::key_to_action;
use txtread::app::state::AppState;
use txtread::config::progress::{ProgressRecord, ProgressStore};
use txtread::reader::{Mode, NavigationPolicy};
use txtread::notes::{QuotesFile, normalize_quote};
use txtread::words::{WordList, collect_references};
use txtread::{Config, Document, ReaderError};

fn write_book(dir: &Path, lines: usize) -> std::path::PathBuf {
    let path = dir.join("moby.txt");
    let text: Vec<String> = (1..=lines).map(|n| format!("Call me Ishmael, line {n}.")).collect();
    std::fs::write(&path, text.join("\n")).unwrap();
    path
}

fn press(state: &mut AppState, key: KeyCode) -> Option<Effect> {
    let action = key_to_action(state.nav.mode, key)?;
    state.handle_action(action)
}

fn position(state: &AppState) -> (usize, usize, usize, usize) {
    (state.nav.from_line, state.nav.to_line, state.nav.current_row, state.nav.line_number)
}

#[test]
fn missing_document_is_reported_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::open(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, ReaderError::DocumentNotFound(_)));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn paging_through_a_book_with_keys() {
    let dir = tempfile::tempdir().unwrap();
    let document = Document::open(write_book(dir.path(), 25)).unwrap();
    let mut state = AppState::new(document, 10, 80, &Config::default());

    for _ in 0..10 {
        press(&mut state, KeyCode::Char('j'));
    }
    assert_eq!(position(&state), (10, 20, 0, 11));

    press(&mut state, KeyCode::Up);
    assert_eq!(position(&state), (0, 10, 9, 10));

    press(&mut state, KeyCode::End);
    assert_eq!(position(&state), (20, 30, 4, 25));
    // Down at the last line is a no-op
    press(&mut state, KeyCode::Down);
    assert_eq!(position(&state), (20, 30, 4, 25));
    assert_eq!(state.current_page().len(), 5);
}

#[test]
fn goto_then_save_and_resume() {
    let dir = tempfile::tempdir().unwrap();
    let book = write_book(dir.path(), 2000);
    let store = ProgressStore::new(dir.path().join("progress"));

    let mut state = AppState::new(Document::open(&book).unwrap(), 53, 80, &Config::default());
    press(&mut state, KeyCode::Char('g'));
    assert_eq!(state.nav.mode, Mode::Goto);
    for c in ['1', '2', '0'] {
        press(&mut state, KeyCode::Char(c));
    }
    press(&mut state, KeyCode::Enter);
    assert_eq!(position(&state), (106, 159, 0, 107));

    assert_eq!(press(&mut state, KeyCode::Char('s')), Some(Effect::SaveProgress));
    store.save(&state.progress_record()).unwrap();

    let record = store.load(&book).unwrap();
    assert_eq!((record.from_line, record.to_line), (106, 159));

    // A later session with a shorter terminal resumes at the same first line
    let mut resumed = AppState::new(Document::open(&book).unwrap(), 20, 80, &Config::default());
    resumed.restore_progress(&record);
    assert_eq!(position(&resumed), (106, 126, 0, 107));
}

#[test]
fn stale_progress_past_the_end_lands_on_last_page() {
    let dir = tempfile::tempdir().unwrap();
    let book = write_book(dir.path(), 30);
    let mut state = AppState::new(Document::open(&book).unwrap(), 10, 80, &Config::default());
    state.restore_progress(&ProgressRecord::new(&book, 500, 510));
    assert_eq!(position(&state), (20, 30, 0, 21));
}

#[test]
fn line_by_line_session_slides_window() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config { line_by_line: true, ..Default::default() };
    let document = Document::open(write_book(dir.path(), 40)).unwrap();
    let mut state = AppState::new(document, 10, 80, &config);
    assert_eq!(state.nav.policy, NavigationPolicy::LineByLine);

    for _ in 0..12 {
        press(&mut state, KeyCode::Down);
    }
    assert_eq!(position(&state), (3, 13, 9, 13));

    press(&mut state, KeyCode::Char('l'));
    assert_eq!(state.nav.policy, NavigationPolicy::ByPage);
    press(&mut state, KeyCode::Down);
    assert_eq!(position(&state), (13, 23, 0, 14));
}

#[test]
fn picking_a_word_appends_it_once() {
    let dir = tempfile::tempdir().unwrap();
    let book = write_book(dir.path(), 5);
    let words = WordList::for_document(&dir.path().join("words"), &book);
    let mut state = AppState::new(Document::open(&book).unwrap(), 10, 80, &Config::default());

    press(&mut state, KeyCode::Char('w'));
    assert_eq!(state.nav.mode, Mode::WordBuilding);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    let effect = press(&mut state, KeyCode::Enter);
    assert_eq!(effect, Some(Effect::SaveWord("Ishmael".to_string())));

    words.append("Ishmael").unwrap();
    assert!(words.contains("Ishmael").unwrap());
    assert_eq!(words.read().unwrap(), vec!["Ishmael"]);

    assert_eq!(press(&mut state, KeyCode::Char('v')), Some(Effect::LoadWords));
    state.enter_view_words(words.read().unwrap());
    assert_eq!(state.words_view.selected_entry(), Some("Ishmael"));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.nav.mode, Mode::Reading);
}

#[test]
fn escape_quits_only_from_reading() {
    let dir = tempfile::tempdir().unwrap();
    let document = Document::open(write_book(dir.path(), 5)).unwrap();
    let mut state = AppState::new(document, 10, 80, &Config::default());

    press(&mut state, KeyCode::Char('h'));
    assert_eq!(press(&mut state, KeyCode::Esc), None);
    assert_eq!(state.nav.mode, Mode::Reading);
    assert_eq!(press(&mut state, KeyCode::Esc), Some(Effect::Quit));
}

#[test]
fn banned_references_stay_hidden_in_later_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("moby.txt");
    let text = "The Pequod sailed from Nantucket.\nCaptain Ahab and Starbuck.\n";
    std::fs::write(&book, text).unwrap();
    let config = Config { data_dir: Some(dir.path().join("data")), ..Default::default() };
    let non_refs = WordList::new(config.non_refs_path().unwrap());
    let document = Document::open(&book).unwrap();

    let mut state = AppState::new(document, 10, 80, &config);
    assert_eq!(press(&mut state, KeyCode::Char('f')), Some(Effect::LoadReferences));
    let found = collect_references(state.document.lines(), &non_refs.read().unwrap());
    assert_eq!(found, vec!["The Pequod", "Nantucket", "Captain Ahab", "Starbuck"]);
    state.enter_references(found);

    let effect = press(&mut state, KeyCode::Enter);
    assert_eq!(effect, Some(Effect::BanReference("The Pequod".to_string())));
    non_refs.append("The Pequod").unwrap();
    assert_eq!(state.references.selected_entry(), Some("Nantucket"));
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.nav.mode, Mode::Reading);

    let again = collect_references(state.document.lines(), &non_refs.read().unwrap());
    assert_eq!(again, vec!["Nantucket", "Captain Ahab", "Starbuck"]);
}

#[test]
fn saved_quotes_collect_in_the_document_file() {
    let dir = tempfile::tempdir().unwrap();
    let book = write_book(dir.path(), 5);
    let config = Config { data_dir: Some(dir.path().join("data")), ..Default::default() };
    let quotes = QuotesFile::for_document(&config.quotes_dir().unwrap(), &book);
    let mut state = AppState::new(Document::open(&book).unwrap(), 10, 80, &config);

    assert_eq!(press(&mut state, KeyCode::Char('a')), Some(Effect::SaveQuote));
    quotes.append(&normalize_quote("  Call me   Ishmael.\n\n  Some years ago  ")).unwrap();

    let saved = std::fs::read_to_string(dir.path().join("data/quotes/moby.txt")).unwrap();
    assert_eq!(saved, "\n__________\nCall me Ishmael.\nSome years ago");
}
