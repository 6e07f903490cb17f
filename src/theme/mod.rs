//! Colour themes for the reader

mod classic;

pub use classic::CLASSIC;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Page
    pub bg_primary: Color,
    pub fg_primary: Color,
    pub fg_muted: Color,

    // Highlighted line
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,

    // Overlays
    pub bg_overlay: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,

    // Messages
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_classic() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Classic");
    }

    #[test]
    fn theme_round_trips_through_json() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }
}
