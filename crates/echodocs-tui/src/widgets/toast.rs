//! Copy confirmation overlay

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

pub struct ToastView<'a> {
    message: &'a str,
    palette: Palette,
}

impl<'a> ToastView<'a> {
    pub fn new(message: &'a str, palette: Palette) -> Self {
        Self { message, palette }
    }

    /// Overlay rect in the top-right corner of `area`.
    pub fn overlay_area(&self, area: Rect) -> Rect {
        let width = (self.message.chars().count() as u16 + 2).min(area.width);
        Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height: 1,
        }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Clear.render(area, buf);
        let line = Line::from(Span::styled(
            format!(" {} ", self.message),
            Style::default()
                .fg(self.palette.toast_fg)
                .bg(self.palette.toast_bg)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_toast_renders_message() {
        let mut term = TestTerminal::new();
        let toast = ToastView::new("Copied!", Palette::dark());
        let area = toast.overlay_area(term.area());
        term.render_widget(toast, area);

        assert!(term.buffer_contains("Copied!"));
    }

    #[test]
    fn test_overlay_sits_in_the_top_right() {
        let toast = ToastView::new("Copied!", Palette::dark());
        let area = toast.overlay_area(Rect::new(0, 0, 80, 24));
        assert_eq!(area.height, 1);
        assert_eq!(area.y, 1);
        assert_eq!(area.x + area.width, 79);
    }
}
