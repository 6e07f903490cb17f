//! Saved word browser

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::app::state::AppState;
use crate::theme::Theme;
use crate::words::WordsPager;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let labels = PagerLabels {
        title: "Saved words",
        empty: " No saved words yet",
        hint: " [j/k] Move  [\u{2190}/\u{2192}] Page  [Esc] Close",
    };
    draw_pager(frame, area, &state.words_view, &labels, theme);
}

/// Text around a paged list overlay
pub(super) struct PagerLabels<'a> {
    pub title: &'a str,
    pub empty: &'a str,
    pub hint: &'a str,
}

/// Centered overlay showing the current page of `pager`
pub(super) fn draw_pager(
    frame: &mut Frame,
    area: Rect,
    pager: &WordsPager,
    labels: &PagerLabels,
    theme: &Theme,
) {
    let overlay_area = centered_rect(60, 100, area);
    frame.render_widget(Clear, overlay_area);

    let title = format!(" {} ({}/{}) ", labels.title, pager.page() + 1, pager.page_count());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_overlay));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let [list_area, hint_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines: Vec<Line> = if pager.is_empty() {
        vec![Line::from(Span::styled(labels.empty, Style::default().fg(theme.fg_muted)))]
    } else {
        pager
            .current_page()
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if i == pager.selected() {
                    Line::from(Span::styled(
                        format!(" {word}"),
                        Style::default()
                            .fg(theme.selection_fg)
                            .bg(theme.selection_bg)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(format!(" {word}"), Style::default().fg(theme.fg_primary)))
                }
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), list_area);

    let hint = Paragraph::new(Span::styled(labels.hint, Style::default().fg(theme.fg_muted)));
    frame.render_widget(hint, hint_area);
}
