//! Section list column

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use echodocs_app::state::AppState;

use crate::theme::{styles, Palette};

pub struct Toc<'a> {
    state: &'a AppState,
    palette: Palette,
}

impl<'a> Toc<'a> {
    pub fn new(state: &'a AppState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for Toc<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(&self.palette, false)
            .title(Span::styled(" Sections ", styles::text_secondary(&self.palette)));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let sections = self.state.filtered();
        if sections.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                " no matches",
                styles::text_muted(&self.palette),
            )))
            .render(inner, buf);
            return;
        }

        // Keep the cursor row visible when the list is taller than the pane
        let visible = inner.height as usize;
        let skip = self
            .state
            .toc_cursor
            .saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = sections
            .iter()
            .enumerate()
            .skip(skip)
            .take(visible)
            .map(|(i, section)| {
                let under_cursor = i == self.state.toc_cursor;
                let selected = section.id == self.state.selected_id;

                let marker = if under_cursor { "▸ " } else { "  " };
                let style = if under_cursor {
                    styles::accent_bold(&self.palette)
                } else if selected {
                    styles::accent(&self.palette)
                } else {
                    styles::text_primary(&self.palette)
                };
                Line::from(vec![
                    Span::styled(marker, styles::accent(&self.palette)),
                    Span::styled(section.title.clone(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_state, TestTerminal};

    #[test]
    fn test_toc_lists_all_sections() {
        let mut term = TestTerminal::new();
        let state = sample_state();
        term.render_widget(Toc::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("Introduction"));
        assert!(term.buffer_contains("Routing"));
        assert!(term.buffer_contains("Echo API"));
    }

    #[test]
    fn test_toc_marks_cursor_row() {
        let mut term = TestTerminal::new();
        let mut state = sample_state();
        state.toc_cursor = 1;
        term.render_widget(Toc::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("▸ Routing"));
    }

    #[test]
    fn test_toc_shrinks_with_filter() {
        let mut term = TestTerminal::new();
        let mut state = sample_state();
        state.query = "routing".to_string();
        term.render_widget(Toc::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("Routing"));
        assert!(!term.buffer_contains("Introduction"));
    }

    #[test]
    fn test_toc_empty_filter_shows_placeholder() {
        let mut term = TestTerminal::new();
        let mut state = sample_state();
        state.query = "zzz".to_string();
        term.render_widget(Toc::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("no matches"));
    }
}
