//! Word picker over the highlighted line

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use textwrap::{Options, wrap};

use super::layout::centered_rect;
use super::page::expand_tabs;
use crate::app::state::AppState;
use crate::theme::Theme;
use crate::words::is_title;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let overlay_area = centered_rect(70, 50, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Pick a word ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_overlay));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let [line_area, words_area, hint_area] =
        Layout::vertical([Constraint::Percentage(40), Constraint::Min(1), Constraint::Length(1)])
            .areas(inner);

    // The full line for context
    let source = expand_tabs(state.highlighted_line().unwrap_or_default());
    let width = line_area.width.saturating_sub(2).max(1) as usize;
    let context: Vec<Line> = wrap(&source, Options::new(width))
        .into_iter()
        .map(|s| Line::from(Span::styled(format!(" {s}"), Style::default().fg(theme.fg_muted))))
        .collect();
    frame.render_widget(Paragraph::new(context), line_area);

    let selected_style =
        Style::default().fg(theme.selection_fg).bg(theme.selection_bg).add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::raw(" ")];
    for (i, word) in state.word_building.words.iter().enumerate() {
        let style = if i == state.word_building.selected {
            selected_style
        } else if is_title(word) {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        spans.push(Span::styled(word.as_str(), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }), words_area);

    let hint = Paragraph::new(Span::styled(
        " [\u{2190}/\u{2192}] Select  [Enter] Save  [c] Copy  [Esc] Cancel",
        Style::default().fg(theme.fg_muted),
    ));
    frame.render_widget(hint, hint_area);
}
