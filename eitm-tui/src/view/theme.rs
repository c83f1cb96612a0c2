//! Theme and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// Dark theme, the only one shipped.
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(56, 189, 248),
            success: Color::Rgb(78, 201, 176),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// Current color scheme.
pub fn colors() -> ThemeColors {
    ThemeColors::dark()
}

/// Common styles.
pub struct Styles;

impl Styles {
    /// Section heading style.
    pub fn heading() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Form label style.
    pub fn label() -> Style {
        Style::default().fg(colors().highlight)
    }

    /// Muted hint text.
    pub fn hint() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Error panel text.
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }

    /// Status bar key style.
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar description style.
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }
}
