//! Help overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use crate::app::input::HELP_ENTRIES;
use crate::theme::Theme;

/// Width of the key column
const KEY_COLUMN: usize = 12;

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_overlay));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(
                    format!(" {keys:<width$}", width = KEY_COLUMN),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.fg_primary)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" [Esc] Close", Style::default().fg(theme.fg_muted))));

    frame.render_widget(Paragraph::new(lines), inner);
}
