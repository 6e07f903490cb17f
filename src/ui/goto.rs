//! Go-to-line dialog

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_area;
use crate::app::state::AppState;
use crate::theme::Theme;

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let dialog_area = centered_area(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Go To ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_overlay));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Line: ", Style::default().fg(theme.fg_muted)),
            Span::styled(state.goto.input.as_str(), Style::default().fg(theme.fg_primary)),
            Span::styled(" ", Style::default().bg(theme.fg_primary).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("1 - {}", state.nav.total_lines()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(Span::styled("[Enter] Go    [Esc] Cancel", Style::default().fg(theme.fg_muted))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
