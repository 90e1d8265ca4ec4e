//! echodocs-tui - Terminal interface for echodocs
//!
//! Ratatui rendering, crossterm event polling, and the event loop that
//! drives the echodocs-app core. Also owns the side-effect executors:
//! the echo transport tasks, the OSC 52 clipboard, and theme persistence.

pub mod clipboard;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use clipboard::Osc52Clipboard;
pub use runner::run;
