//! Reading view: the page window plus the status line

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::AppState;
use crate::reader::{lines_to_next_breakpoint, percent};
use crate::theme::Theme;

/// Spaces a tab expands to
const TAB_WIDTH: usize = 4;

/// Draw the page and the status line below it
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [page_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let width = page_area.width as usize;
    let lines: Vec<Line> = state
        .current_page()
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let text = expand_tabs(text);
            if row == state.nav.current_row {
                // Pad so the highlight spans the whole row
                let padded = format!("{text:<width$}");
                Line::from(Span::styled(
                    padded,
                    Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(theme.fg_primary)))
            }
        })
        .collect();

    let page = Paragraph::new(lines).style(Style::default().bg(theme.bg_primary));
    frame.render_widget(page, page_area);

    draw_status(frame, status_area, state, theme);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let [message_area, position_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    if let Some(message) = &state.message {
        let style = if message.is_error {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.status_fg).bg(theme.status_bg)
        };
        frame.render_widget(Paragraph::new(Span::styled(message.text.as_str(), style)), message_area);
    }

    if state.nav.show_status_bar {
        let style = Style::default().fg(theme.status_fg).bg(theme.status_bg);
        frame.render_widget(Paragraph::new(Span::styled(status_text(state), style)), position_area);
    }
}

/// Position summary shown on the status line
pub fn status_text(state: &AppState) -> String {
    let nav = &state.nav;
    let total = nav.total_lines();
    let pct = match percent(nav.line_number, total) {
        Some(pct) => format!("%{pct:.1}"),
        None => "%-".to_string(),
    };

    let mut text = format!("{} of {}      ({})", nav.current_line(), total, pct);
    if nav.show_percentage_points {
        if let Some(k) = lines_to_next_breakpoint(nav.line_number, total) {
            text.push_str(&format!("  (> {k})"));
        }
    }
    text.push_str(&format!("  [{}]", nav.policy.label()));
    text
}

/// Replace tabs with spaces so columns line up in the terminal
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}
