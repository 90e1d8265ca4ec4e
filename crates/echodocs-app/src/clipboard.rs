//! Clipboard facility interface
//!
//! Write-only, used by the code-block copy action. The TUI supplies the
//! real implementation (OSC 52); handlers only see success or failure and
//! turn it into a transient toast.

/// A write-only clipboard.
pub trait Clipboard {
    /// Write `text` to the clipboard. The error string is only logged;
    /// the user sees a generic "Copy failed" notice.
    fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Clipboard that succeeds without doing anything. Used in tests and as
/// a fallback when no terminal is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn write_text(&self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}
