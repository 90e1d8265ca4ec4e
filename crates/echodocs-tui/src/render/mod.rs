//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use echodocs_app::state::AppState;

use crate::layout;
use crate::theme::Palette;
use crate::widgets;

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_theme(state.dark);

    // Fill the whole terminal with the base background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.base_bg)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state, palette), areas.header);
    frame.render_widget(widgets::Toc::new(state, palette), areas.toc);
    frame.render_widget(widgets::ContentView::new(state, palette), areas.content);
    frame.render_widget(widgets::Footer::new(state, palette), areas.footer);

    if let Some(toast) = &state.toast {
        let toast_view = widgets::ToastView::new(&toast.message, palette);
        let overlay = toast_view.overlay_area(areas.content);
        frame.render_widget(toast_view, overlay);
    }
}
