//! Document pane
//!
//! Renders every visible section into one line buffer, then scrolls the
//! buffer so the selected section sits at the top. Rendering all sections
//! (rather than only the selected one) keeps the copy-shortcut numbering
//! identical to what is on screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use echodocs_app::echo::{EchoKind, EchoSlot};
use echodocs_app::state::{AppState, InputMode, MAX_COPY_SLOTS};
use echodocs_core::{strip_html, Block, Section};

use crate::theme::{styles, Palette};

pub struct ContentView<'a> {
    state: &'a AppState,
    palette: Palette,
}

impl<'a> ContentView<'a> {
    pub fn new(state: &'a AppState, palette: Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for ContentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(&self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, anchor) = build_lines(self.state, &self.palette, inner.width);
        let offset = anchor.saturating_add(self.state.scroll);
        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(inner, buf);
    }
}

/// Build the full line buffer for the current filter, plus the line offset
/// of the selected section. An unknown or filtered-out selection anchors
/// at the top.
pub(crate) fn build_lines(
    state: &AppState,
    palette: &Palette,
    width: u16,
) -> (Vec<Line<'static>>, u16) {
    let sections = state.filtered();
    if sections.is_empty() {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "  No sections match the current search.",
                styles::text_muted(palette),
            )),
        ];
        return (lines, 0);
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut anchor = 0u16;
    let mut code_counter = 0usize;

    for section in &sections {
        if section.id == state.selected_id {
            anchor = lines.len() as u16;
        }
        render_section(state, palette, width, section, &mut code_counter, &mut lines);
        lines.push(Line::default());
    }

    (lines, anchor)
}

fn render_section(
    state: &AppState,
    palette: &Palette,
    width: u16,
    section: &Section,
    code_counter: &mut usize,
    lines: &mut Vec<Line<'static>>,
) {
    let selected = section.id == state.selected_id;
    let title_style = if selected {
        styles::accent_bold(palette)
    } else {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(if selected { "▌ " } else { "  " }, styles::accent(palette)),
        Span::styled(section.title.clone(), title_style),
    ]));

    if let Some(subtitle) = &section.subtitle {
        lines.push(Line::from(Span::styled(
            format!("  {subtitle}"),
            styles::text_secondary(palette),
        )));
    }
    lines.push(Line::default());

    for block in &section.blocks {
        render_block(state, palette, width, block, code_counter, lines);
    }
}

fn render_block(
    state: &AppState,
    palette: &Palette,
    width: u16,
    block: &Block,
    code_counter: &mut usize,
    lines: &mut Vec<Line<'static>>,
) {
    match block {
        Block::Hr => {
            let rule_width = width.saturating_sub(4).clamp(4, 40) as usize;
            lines.push(Line::from(Span::styled(
                format!("  {}", "─".repeat(rule_width)),
                styles::text_muted(palette),
            )));
            lines.push(Line::default());
        }

        Block::Paragraph { html } => {
            for row in wrap_text(&strip_html(html), width.saturating_sub(4) as usize) {
                lines.push(Line::from(Span::styled(
                    format!("  {row}"),
                    styles::text_primary(palette),
                )));
            }
            lines.push(Line::default());
        }

        Block::List { items } => {
            for item in items {
                let mut first = true;
                for row in wrap_text(&strip_html(item), width.saturating_sub(6) as usize) {
                    let bullet = if first { "  • " } else { "    " };
                    first = false;
                    lines.push(Line::from(Span::styled(
                        format!("{bullet}{row}"),
                        styles::text_primary(palette),
                    )));
                }
            }
            lines.push(Line::default());
        }

        Block::Code {
            lang,
            caption,
            code,
        } => {
            render_code(palette, lang, caption.as_deref(), code, code_counter, lines);
        }

        Block::EchoGet => {
            render_echo(state, palette, EchoKind::Get, lines);
        }

        Block::EchoPost => {
            render_echo(state, palette, EchoKind::Post, lines);
        }

        // Unrecognized block types render nothing
        Block::Unknown => {}
    }
}

fn render_code(
    palette: &Palette,
    lang: &str,
    caption: Option<&str>,
    code: &str,
    code_counter: &mut usize,
    lines: &mut Vec<Line<'static>>,
) {
    let mut header = vec![Span::raw("  ")];
    if *code_counter < MAX_COPY_SLOTS {
        header.push(Span::styled(
            format!("[{}] ", *code_counter + 1),
            styles::hint_key(palette),
        ));
    }
    *code_counter += 1;

    if let Some(caption) = caption {
        header.push(Span::styled(
            caption.to_string(),
            styles::text_secondary(palette),
        ));
        header.push(Span::raw(" "));
    }
    if !lang.is_empty() {
        header.push(Span::styled(format!("({lang})"), styles::text_muted(palette)));
    }
    lines.push(Line::from(header));

    let code_style = Style::default()
        .fg(palette.text_primary)
        .bg(palette.code_bg);
    for row in code.lines() {
        lines.push(Line::from(Span::styled(format!("  {row}"), code_style)));
    }
    if code.is_empty() {
        lines.push(Line::from(Span::styled("  ".to_string(), code_style)));
    }
    lines.push(Line::default());
}

fn render_echo(
    state: &AppState,
    palette: &Palette,
    kind: EchoKind,
    lines: &mut Vec<Line<'static>>,
) {
    let slot = state.echo.slot(kind);
    let (verb, hints) = match kind {
        EchoKind::Get => ("GET", "[g] send"),
        EchoKind::Post => ("POST", "[p] send  [e] edit body"),
    };

    lines.push(Line::from(vec![
        Span::styled("  ▶ ", styles::accent(palette)),
        Span::styled(
            format!("{verb} /api/echo"),
            styles::accent_bold(palette),
        ),
        Span::raw("   "),
        Span::styled(hints.to_string(), styles::hint_label(palette)),
    ]));

    if kind == EchoKind::Post {
        let editing = state.input_mode == InputMode::PostInput;
        let cursor = if editing { "▏" } else { "" };
        let input_style = if editing {
            styles::accent(palette)
        } else {
            styles::text_secondary(palette)
        };
        lines.push(Line::from(vec![
            Span::styled("    body: ", styles::text_muted(palette)),
            Span::styled(format!("{}{cursor}", state.echo.post_input), input_style),
        ]));
    }

    render_echo_slot(palette, slot, lines);
    lines.push(Line::default());
}

fn render_echo_slot(palette: &Palette, slot: &EchoSlot, lines: &mut Vec<Line<'static>>) {
    if !slot.status.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(slot.status.clone(), styles::echo_status(palette, &slot.status)),
        ]));
    }
    for row in slot.response.lines() {
        lines.push(Line::from(Span::styled(
            format!("    {row}"),
            styles::text_secondary(palette),
        )));
    }
}

/// Greedy word wrap. Words longer than the width are split hard.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
        }

        while current.chars().count() > width {
            let head: String = current.chars().take(width).collect();
            let tail: String = current.chars().skip(width).collect();
            rows.push(head);
            current = tail;
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_state;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_build_lines_contains_titles_and_code() {
        let state = sample_state();
        let (lines, anchor) = build_lines(&state, &Palette::dark(), 80);
        let text = plain(&lines).join("\n");

        assert!(text.contains("Introduction"));
        assert!(text.contains("Routing"));
        assert!(text.contains("make all"));
        assert_eq!(anchor, 0);
    }

    #[test]
    fn test_code_blocks_carry_copy_badges_in_order() {
        let state = sample_state();
        let (lines, _) = build_lines(&state, &Palette::dark(), 80);
        let text = plain(&lines).join("\n");

        let one = text.find("[1]").expect("first badge");
        let two = text.find("[2]").expect("second badge");
        assert!(one < two);
    }

    #[test]
    fn test_anchor_points_at_selected_section() {
        let mut state = sample_state();
        state.jump_to("routing");
        let (lines, anchor) = build_lines(&state, &Palette::dark(), 80);
        let rows = plain(&lines);
        assert!(rows[anchor as usize].contains("Routing"));
    }

    #[test]
    fn test_unknown_selection_anchors_at_top() {
        let mut state = sample_state();
        state.jump_to("missing-section");
        let (_, anchor) = build_lines(&state, &Palette::dark(), 80);
        assert_eq!(anchor, 0);
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut state = sample_state();
        state.query = "zzz-no-match".to_string();
        let (lines, anchor) = build_lines(&state, &Palette::dark(), 80);
        let text = plain(&lines).join("\n");
        assert!(text.contains("No sections match"));
        assert_eq!(anchor, 0);
    }

    #[test]
    fn test_echo_panels_show_status_and_response() {
        let mut state = sample_state();
        let generation = state.echo.slot_mut(EchoKind::Get).begin();
        {
            let (lines, _) = build_lines(&state, &Palette::dark(), 80);
            let text = plain(&lines).join("\n");
            assert!(text.contains("GET /api/echo"));
            assert!(text.contains("sending…"));
        }
        state.echo.slot_mut(EchoKind::Get).settle(
            generation,
            echodocs_app::EchoOutcome::Response {
                status: 200,
                body: "{\"ok\":true}".to_string(),
            },
        );
        let (lines, _) = build_lines(&state, &Palette::dark(), 80);
        let text = plain(&lines).join("\n");
        assert!(text.contains("status 200"));
        assert!(text.contains("{\"ok\":true}"));
    }

    #[test]
    fn test_post_panel_shows_editable_body() {
        let mut state = sample_state();
        let (lines, _) = build_lines(&state, &Palette::dark(), 80);
        let text = plain(&lines).join("\n");
        assert!(text.contains("POST /api/echo"));
        assert!(text.contains("{\"msg\":\"hello\"}"));
    }

    #[test]
    fn test_wrap_text_greedy() {
        let rows = wrap_text("one two three four five", 9);
        assert_eq!(rows, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let rows = wrap_text("abcdefghijklmnop", 8);
        assert_eq!(rows, vec!["abcdefgh", "ijklmnop"]);
    }
}
