//! Message types for the application (TEA pattern)

use crate::echo::{EchoKind, EchoOutcome};
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry, spinner)
    Tick,

    /// Quit the application (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search input mode (focus the query line)
    StartSearch,
    /// Leave search input mode, keeping the query
    LeaveSearch,
    /// Clear the query and leave search input mode
    ClearSearch,
    /// Append a character to the query
    SearchChar(char),
    /// Delete the last character of the query
    SearchBackspace,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move the table-of-contents cursor up
    TocUp,
    /// Move the table-of-contents cursor down
    TocDown,
    /// Activate the entry under the cursor: highlight it and anchor the
    /// content view to it
    TocActivate,
    /// Out-of-band anchor change (the fragment-change analog): updates
    /// the highlighted section without moving the TOC cursor
    JumpToSection { id: String },
    /// Scroll the content view by `lines` (negative = up)
    ScrollContent { lines: i32 },

    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    /// Flip dark/light, persist the new value
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Copy Messages
    // ─────────────────────────────────────────────────────────
    /// Copy the nth visible code block (0-based)
    CopyCodeBlock(usize),
    /// Clipboard write finished; raise the toast
    CopyFinished { ok: bool },

    // ─────────────────────────────────────────────────────────
    // Echo Harness Messages
    // ─────────────────────────────────────────────────────────
    /// Trigger the GET request
    EchoGet,
    /// Trigger the POST request with the current input
    EchoPost,
    /// Enter POST input editing mode
    StartPostEdit,
    /// Leave POST input editing mode
    LeavePostEdit,
    /// Append a character to the POST input
    PostChar(char),
    /// Delete the last character of the POST input
    PostBackspace,
    /// An echo request settled (from the transport task)
    EchoSettled {
        kind: EchoKind,
        generation: u64,
        outcome: EchoOutcome,
    },
}
