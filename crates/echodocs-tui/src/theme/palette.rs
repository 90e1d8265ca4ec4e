//! Color palettes for the dark and light themes

use ratatui::style::Color;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // Background layers
    pub base_bg: Color,
    pub panel_bg: Color,
    pub code_bg: Color,

    // Borders
    pub border_dim: Color,
    pub border_active: Color,

    // Accent
    pub accent: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Status
    pub status_ok: Color,
    pub status_error: Color,
    pub status_pending: Color,

    // Toast overlay
    pub toast_fg: Color,
    pub toast_bg: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            base_bg: Color::Rgb(14, 16, 22),
            panel_bg: Color::Rgb(20, 24, 32),
            code_bg: Color::Rgb(26, 30, 40),
            border_dim: Color::Rgb(50, 56, 66),
            border_active: Color::Rgb(94, 170, 255),
            accent: Color::Rgb(94, 170, 255),
            text_primary: Color::Rgb(205, 212, 221),
            text_secondary: Color::Rgb(140, 148, 158),
            text_muted: Color::Rgb(88, 95, 105),
            status_ok: Color::Rgb(62, 190, 130),
            status_error: Color::Rgb(238, 90, 110),
            status_pending: Color::Rgb(228, 180, 60),
            toast_fg: Color::Rgb(14, 16, 22),
            toast_bg: Color::Rgb(94, 170, 255),
        }
    }

    pub const fn light() -> Self {
        Self {
            base_bg: Color::Rgb(248, 248, 246),
            panel_bg: Color::Rgb(238, 239, 238),
            code_bg: Color::Rgb(230, 232, 233),
            border_dim: Color::Rgb(196, 200, 204),
            border_active: Color::Rgb(30, 100, 200),
            accent: Color::Rgb(30, 100, 200),
            text_primary: Color::Rgb(30, 34, 40),
            text_secondary: Color::Rgb(92, 100, 110),
            text_muted: Color::Rgb(150, 156, 164),
            status_ok: Color::Rgb(20, 140, 85),
            status_error: Color::Rgb(190, 40, 60),
            status_pending: Color::Rgb(160, 120, 20),
            toast_fg: Color::Rgb(248, 248, 246),
            toast_bg: Color::Rgb(30, 100, 200),
        }
    }

    /// Palette for the current theme flag.
    pub const fn for_theme(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
