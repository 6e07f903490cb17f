//! Reference browser

use ratatui::{Frame, layout::Rect};

use super::words_view::{PagerLabels, draw_pager};
use crate::app::state::AppState;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let labels = PagerLabels {
        title: "References",
        empty: " No references found",
        hint: " [j/k] Move  [\u{2190}/\u{2192}] Page  [Enter] Ban  [Esc] Close",
    };
    draw_pager(frame, area, &state.references, &labels, theme);
}
