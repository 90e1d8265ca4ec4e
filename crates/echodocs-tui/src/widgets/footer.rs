//! Footer: key hints plus the search line

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use chrono::Datelike;
use echodocs_app::state::{AppState, InputMode};

use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    state: &'a AppState,
    palette: Palette,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState, palette: Palette) -> Self {
        Self { state, palette }
    }

    fn hint_spans(&self, pairs: &[(&str, &str)]) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in pairs {
            spans.push(Span::styled(format!("[{key}]"), styles::hint_key(&self.palette)));
            spans.push(Span::styled(
                format!(" {label}  "),
                styles::hint_label(&self.palette),
            ));
        }
        spans
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.palette.panel_bg));

        let line = match self.state.input_mode {
            InputMode::SearchInput => Line::from(vec![
                Span::styled(" /", styles::accent_bold(&self.palette)),
                Span::styled(
                    format!("{}▏", self.state.query),
                    styles::accent(&self.palette),
                ),
                Span::styled("  [Enter/Esc] done", styles::hint_label(&self.palette)),
            ]),

            InputMode::PostInput => Line::from(self.hint_spans(&[
                ("Enter", "send"),
                ("Esc", "cancel"),
            ])),

            InputMode::Browse if !self.state.query.is_empty() => {
                let mut spans = vec![
                    Span::styled(" filter: ", styles::hint_label(&self.palette)),
                    Span::styled(self.state.query.clone(), styles::accent(&self.palette)),
                    Span::raw("  "),
                ];
                spans.extend(self.hint_spans(&[("/", "edit"), ("Esc", "clear"), ("q", "quit")]));
                Line::from(spans)
            }

            InputMode::Browse => {
                let mut spans = self.hint_spans(&[
                    ("/", "search"),
                    ("↑↓", "sections"),
                    ("Enter", "open"),
                    ("1-9", "copy"),
                    ("q", "quit"),
                ]);
                spans.push(Span::styled(
                    format!("© {}", chrono::Local::now().year()),
                    styles::text_muted(&self.palette),
                ));
                Line::from(spans)
            }
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_state, TestTerminal};

    #[test]
    fn test_browse_footer_shows_hints() {
        let mut term = TestTerminal::with_size(100, 3);
        let state = sample_state();
        term.render_widget(Footer::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("[/] search"));
        assert!(term.buffer_contains("[q] quit"));
        assert!(term.buffer_contains("©"));
    }

    #[test]
    fn test_search_footer_echoes_the_query() {
        let mut term = TestTerminal::new();
        let mut state = sample_state();
        state.input_mode = InputMode::SearchInput;
        state.query = "rout".to_string();
        term.render_widget(Footer::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("/rout"));
        assert!(term.buffer_contains("done"));
    }

    #[test]
    fn test_active_filter_shown_while_browsing() {
        let mut term = TestTerminal::new();
        let mut state = sample_state();
        state.query = "echo".to_string();
        term.render_widget(Footer::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("filter: echo"));
        assert!(term.buffer_contains("[Esc] clear"));
    }

    #[test]
    fn test_post_edit_footer() {
        let mut term = TestTerminal::new();
        let mut state = sample_state();
        state.input_mode = InputMode::PostInput;
        term.render_widget(Footer::new(&state, Palette::dark()), term.area());

        assert!(term.buffer_contains("[Enter] send"));
        assert!(term.buffer_contains("[Esc] cancel"));
    }
}
