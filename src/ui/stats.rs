//! Reading statistics screen

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::app::state::AppState;
use crate::theme::Theme;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_overlay));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let summary = state.stats.summary(
        &state.nav,
        state.document.word_count(),
        state.saved_words,
        Instant::now(),
    );
    let mut lines: Vec<Line> = summary
        .into_iter()
        .map(|l| Line::from(Span::styled(format!(" {l}"), Style::default().fg(theme.fg_primary))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Press any key", Style::default().fg(theme.fg_muted))));

    frame.render_widget(Paragraph::new(lines), inner);
}
