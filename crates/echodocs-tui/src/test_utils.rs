//! Test utilities for rendering verification
//!
//! TestBackend-based rendering is fast and deterministic; widget tests
//! assert on buffer text instead of driving a real terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use echodocs_app::state::AppState;
use echodocs_core::{Block, ContentStore, Section};

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wrapper around a TestBackend terminal with buffer assertions.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("render widget");
    }

    /// Draw a full frame, for testing `render::view`.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Entire buffer as text, rows separated by newlines.
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Three-section document exercising every visible block type.
pub fn sample_store() -> ContentStore {
    ContentStore::from_sections(vec![
        Section {
            id: "intro".to_string(),
            title: "Introduction".to_string(),
            subtitle: Some("Getting started".to_string()),
            blocks: vec![
                Block::Paragraph {
                    html: "A tiny HTTP server.".to_string(),
                },
                Block::Code {
                    lang: "sh".to_string(),
                    caption: Some("Build".to_string()),
                    code: "make all".to_string(),
                },
            ],
        },
        Section {
            id: "routing".to_string(),
            title: "Routing".to_string(),
            subtitle: None,
            blocks: vec![
                Block::Hr,
                Block::List {
                    items: vec!["exact match".to_string(), "longest prefix".to_string()],
                },
                Block::Code {
                    lang: "c".to_string(),
                    caption: None,
                    code: "router_add(\"/api/echo\");".to_string(),
                },
            ],
        },
        Section {
            id: "api".to_string(),
            title: "Echo API".to_string(),
            subtitle: None,
            blocks: vec![Block::EchoGet, Block::EchoPost],
        },
    ])
}

pub fn sample_state() -> AppState {
    AppState::new(sample_store(), "http://127.0.0.1:8080", true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_dimensions() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello World"), term.area());
        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_sample_state_shape() {
        let state = sample_state();
        assert_eq!(state.filtered().len(), 3);
        assert_eq!(state.visible_code_blocks().len(), 2);
    }
}
