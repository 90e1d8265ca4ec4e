//! Top-level message dispatcher

use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState, InputMode};

use super::{echo, keys, UpdateAction, UpdateResult};

/// Process one message against the state. Pure except for the returned
/// [`UpdateAction`], which the runner executes.
pub fn update(state: &mut AppState, msg: Message) -> UpdateResult {
    match msg {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            state.expire_toast();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────
        Message::StartSearch => {
            state.input_mode = InputMode::SearchInput;
            UpdateResult::none()
        }

        Message::LeaveSearch => {
            state.input_mode = InputMode::Browse;
            UpdateResult::none()
        }

        Message::ClearSearch => {
            state.query.clear();
            state.clamp_cursor();
            UpdateResult::none()
        }

        Message::SearchChar(c) => {
            state.query.push(c);
            state.clamp_cursor();
            UpdateResult::none()
        }

        Message::SearchBackspace => {
            state.query.pop();
            state.clamp_cursor();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────
        Message::TocUp => {
            state.toc_up();
            UpdateResult::none()
        }

        Message::TocDown => {
            state.toc_down();
            UpdateResult::none()
        }

        Message::TocActivate => {
            state.activate_cursor_entry();
            UpdateResult::none()
        }

        Message::JumpToSection { id } => {
            state.jump_to(&id);
            UpdateResult::none()
        }

        Message::ScrollContent { lines } => {
            state.scroll_by(lines);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.dark = !state.dark;
            UpdateResult::action(UpdateAction::PersistTheme { dark: state.dark })
        }

        // ─────────────────────────────────────────────────────
        // Clipboard
        // ─────────────────────────────────────────────────────
        Message::CopyCodeBlock(index) => {
            match state.visible_code_blocks().get(index) {
                Some(code) => UpdateResult::action(UpdateAction::CopyToClipboard {
                    text: code.to_string(),
                }),
                None => {
                    debug!(index, "copy shortcut with no matching code block");
                    UpdateResult::none()
                }
            }
        }

        Message::CopyFinished { ok } => {
            state.raise_toast(if ok { "Copied!" } else { "Copy failed" });
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Echo harness
        // ─────────────────────────────────────────────────────
        Message::EchoGet | Message::EchoPost => echo::trigger(state, msg),

        Message::StartPostEdit => {
            state.input_mode = InputMode::PostInput;
            UpdateResult::none()
        }

        Message::LeavePostEdit => {
            state.input_mode = InputMode::Browse;
            UpdateResult::none()
        }

        Message::PostChar(c) => {
            state.echo.post_input.push(c);
            UpdateResult::none()
        }

        Message::PostBackspace => {
            state.echo.post_input.pop();
            UpdateResult::none()
        }

        Message::EchoSettled {
            kind,
            generation,
            outcome,
        } => echo::settle(state, kind, generation, outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_fixtures::sample_state;

    #[test]
    fn test_quit_sets_phase() {
        let mut state = sample_state();
        update(&mut state, Message::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_search_chars_build_query_and_clamp_cursor() {
        let mut state = sample_state();
        state.toc_cursor = 2;
        update(&mut state, Message::StartSearch);
        assert_eq!(state.input_mode, InputMode::SearchInput);
        for c in "routing".chars() {
            update(&mut state, Message::SearchChar(c));
        }
        assert_eq!(state.query, "routing");
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.toc_cursor, 0);
    }

    #[test]
    fn test_clear_search_restores_all_sections() {
        let mut state = sample_state();
        state.query = "nothing-matches-this".to_string();
        assert!(state.filtered().is_empty());
        update(&mut state, Message::ClearSearch);
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn test_toggle_theme_flips_and_persists() {
        let mut state = sample_state();
        assert!(state.dark);
        let result = update(&mut state, Message::ToggleTheme);
        assert!(!state.dark);
        assert_eq!(
            result.action,
            Some(UpdateAction::PersistTheme { dark: false })
        );
        let result = update(&mut state, Message::ToggleTheme);
        assert!(state.dark);
        assert_eq!(result.action, Some(UpdateAction::PersistTheme { dark: true }));
    }

    #[test]
    fn test_theme_toggle_preserves_the_rest_of_the_state() {
        let mut state = sample_state();
        state.query = "echo".to_string();
        state.toc_cursor = 0;
        update(&mut state, Message::ToggleTheme);
        assert_eq!(state.query, "echo");
        assert_eq!(state.toc_cursor, 0);
        assert_eq!(state.selected_id, "intro");
    }

    #[test]
    fn test_toc_activate_moves_cursor_and_highlight_together() {
        let mut state = sample_state();
        update(&mut state, Message::TocDown);
        update(&mut state, Message::TocActivate);
        assert_eq!(state.selected_id, "routing");
        assert_eq!(state.toc_cursor, 1);
    }

    #[test]
    fn test_jump_to_section_leaves_cursor_alone() {
        let mut state = sample_state();
        update(&mut state, Message::TocDown);
        update(
            &mut state,
            Message::JumpToSection {
                id: "api".to_string(),
            },
        );
        assert_eq!(state.selected_id, "api");
        assert_eq!(state.toc_cursor, 1);
    }

    #[test]
    fn test_copy_code_block_yields_clipboard_action() {
        let mut state = sample_state();
        let result = update(&mut state, Message::CopyCodeBlock(0));
        assert_eq!(
            result.action,
            Some(UpdateAction::CopyToClipboard {
                text: "make all".to_string()
            })
        );
    }

    #[test]
    fn test_copy_out_of_range_is_a_no_op() {
        let mut state = sample_state();
        let result = update(&mut state, Message::CopyCodeBlock(7));
        assert!(result.action.is_none());
        assert!(result.message.is_none());
    }

    #[test]
    fn test_copy_finished_raises_toast() {
        let mut state = sample_state();
        update(&mut state, Message::CopyFinished { ok: true });
        assert_eq!(state.toast.as_ref().unwrap().message, "Copied!");
        update(&mut state, Message::CopyFinished { ok: false });
        assert_eq!(state.toast.as_ref().unwrap().message, "Copy failed");
    }

    #[test]
    fn test_post_input_editing() {
        let mut state = sample_state();
        update(&mut state, Message::StartPostEdit);
        assert_eq!(state.input_mode, InputMode::PostInput);
        update(&mut state, Message::PostBackspace);
        update(&mut state, Message::PostChar('}'));
        assert_eq!(state.echo.post_input, "{\"msg\":\"hello\"}");
        update(&mut state, Message::LeavePostEdit);
        assert_eq!(state.input_mode, InputMode::Browse);
    }
}
