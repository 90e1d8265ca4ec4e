//! Key routing per input mode
//!
//! Keys translate to semantic messages; the actual state changes live in
//! `update`. Which table applies depends on [`InputMode`].

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, InputMode};

use super::UpdateResult;

/// Lines moved per page scroll key.
const PAGE_SCROLL: i32 = 10;

pub(super) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Ctrl-C quits from any mode
    if key == InputKey::CharCtrl('c') {
        return UpdateResult::message(Message::Quit);
    }

    match state.input_mode {
        InputMode::Browse => browse_key(state, key),
        InputMode::SearchInput => search_key(key),
        InputMode::PostInput => post_key(key),
    }
}

fn browse_key(state: &AppState, key: InputKey) -> UpdateResult {
    let msg = match key {
        InputKey::Char('q') => Message::Quit,
        InputKey::Char('/') => Message::StartSearch,
        InputKey::Esc => Message::ClearSearch,

        InputKey::Up | InputKey::Char('k') => Message::TocUp,
        InputKey::Down | InputKey::Char('j') => Message::TocDown,
        InputKey::Enter => Message::TocActivate,
        InputKey::PageUp | InputKey::Char('u') => Message::ScrollContent {
            lines: -PAGE_SCROLL,
        },
        InputKey::PageDown | InputKey::Char('d') => Message::ScrollContent { lines: PAGE_SCROLL },

        InputKey::Char('t') => Message::ToggleTheme,

        InputKey::Char('g') => Message::EchoGet,
        InputKey::Char('p') => Message::EchoPost,
        InputKey::Char('e') | InputKey::Char('i') => Message::StartPostEdit,

        InputKey::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < state.visible_code_blocks().len() {
                Message::CopyCodeBlock(index)
            } else {
                return UpdateResult::none();
            }
        }

        _ => return UpdateResult::none(),
    };
    UpdateResult::message(msg)
}

fn search_key(key: InputKey) -> UpdateResult {
    let msg = match key {
        // Enter keeps the query, Esc keeps it too: both just hand focus
        // back to browsing. Clearing is Esc from browse mode.
        InputKey::Enter | InputKey::Esc => Message::LeaveSearch,
        InputKey::Backspace => Message::SearchBackspace,
        InputKey::Up => Message::TocUp,
        InputKey::Down => Message::TocDown,
        InputKey::Char(c) => Message::SearchChar(c),
        _ => return UpdateResult::none(),
    };
    UpdateResult::message(msg)
}

fn post_key(key: InputKey) -> UpdateResult {
    let msg = match key {
        InputKey::Esc => Message::LeavePostEdit,
        // Enter submits: focus returns to browse and the request fires
        InputKey::Enter => Message::EchoPost,
        InputKey::Backspace => Message::PostBackspace,
        InputKey::Char(c) => Message::PostChar(c),
        _ => return UpdateResult::none(),
    };
    UpdateResult::message(msg)
}
