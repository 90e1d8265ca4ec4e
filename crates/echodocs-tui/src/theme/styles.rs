//! Semantic style builders

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Keybinding hints ---
pub fn hint_key(p: &Palette) -> Style {
    Style::default().fg(p.status_pending)
}

pub fn hint_label(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Panels ---
/// Bordered panel block, brighter when focused.
pub fn panel_block(p: &Palette, active: bool) -> Block<'static> {
    let border = if active { p.border_active } else { p.border_dim };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(p.panel_bg))
}

// --- Echo status line ---
pub fn echo_status(p: &Palette, status: &str) -> Style {
    if status.starts_with("status") {
        Style::default().fg(p.status_ok)
    } else if status == echodocs_app::echo::STATUS_FAILED {
        Style::default().fg(p.status_error)
    } else {
        Style::default().fg(p.status_pending)
    }
}
