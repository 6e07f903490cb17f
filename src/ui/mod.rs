//! UI rendering components

pub mod goto;
pub mod help;
pub mod layout;
pub mod page;
pub mod references;
pub mod stats;
pub mod word_building;
pub mod words_view;

use ratatui::Frame;

use crate::app::state::AppState;
use crate::reader::Mode;
use crate::theme::Theme;

/// Main draw function
///
/// The page is always drawn; dialogs are overlaid on top of it.
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    page::draw(frame, area, state, theme);

    match state.nav.mode {
        Mode::Reading => {}
        Mode::Help => help::draw(frame, area, theme),
        Mode::Goto => goto::draw(frame, area, state, theme),
        Mode::WordBuilding => word_building::draw(frame, area, state, theme),
        Mode::ViewWords => words_view::draw(frame, area, state, theme),
        Mode::References => references::draw(frame, area, state, theme),
        Mode::Stats => stats::draw(frame, area, state, theme),
    }
}
