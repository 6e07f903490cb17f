//! Classic terminal palette

use ratatui::style::Color;

use super::Theme;

/// Terminal default colours with an inverted highlight and a green status bar
pub const CLASSIC: Theme = Theme {
    name: String::new(),

    bg_primary: Color::Reset,
    fg_primary: Color::Reset,
    fg_muted: Color::DarkGray,

    highlight_fg: Color::Black,
    highlight_bg: Color::White,

    status_fg: Color::Black,
    status_bg: Color::Green,

    bg_overlay: Color::Reset,
    accent: Color::Cyan,
    border: Color::DarkGray,
    border_focused: Color::Green,
    selection_fg: Color::Black,
    selection_bg: Color::Cyan,

    success: Color::Green,
    error: Color::Red,
};

impl Theme {
    pub fn classic() -> Self {
        Theme { name: "Classic".to_string(), ..CLASSIC }
    }
}
