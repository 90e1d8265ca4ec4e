//! Screen layout for the viewer
//!
//! Header on top, footer on the bottom, and the middle split into the
//! section list (left) and the content pane (right).

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the section list column, including its borders.
const TOC_WIDTH: u16 = 30;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (app name, endpoint, theme indicator)
    pub header: Rect,

    /// Section list column
    pub toc: Rect,

    /// Rendered document pane
    pub content: Rect,

    /// Key hints and the search line
    pub footer: Rect,
}

/// Split the terminal into the four fixed regions.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(area);

    // Narrow terminals give the content pane whatever is left
    let columns = Layout::horizontal([Constraint::Length(TOC_WIDTH), Constraint::Min(10)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        toc: columns[0],
        content: columns[1],
        footer: rows[2],
    }
}
