//! Backend-agnostic key representation
//!
//! The TUI layer translates crossterm events into these; handlers never see
//! a terminal type directly, which keeps key routing unit-testable.

/// A single key press, normalized across terminal backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    /// Character with Ctrl held (e.g. Ctrl+C)
    CharCtrl(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}
