//! OSC 52 clipboard
//!
//! Writes the selection straight to the controlling terminal as an OSC 52
//! escape, which modern terminal emulators forward to the system clipboard.
//! Works over SSH, needs no display server, and degrades to a no-op on
//! terminals that ignore the sequence.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use echodocs_app::Clipboard;

pub struct Osc52Clipboard;

/// Escape sequence carrying `text` to the terminal clipboard.
fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<(), String> {
        let mut out = io::stdout();
        out.write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps_base64_payload() {
        let seq = osc52_sequence("make all");
        assert!(seq.starts_with("\x1b]52;c;"));
        assert!(seq.ends_with('\x07'));
        let payload = &seq["\x1b]52;c;".len()..seq.len() - 1];
        assert_eq!(payload, STANDARD.encode("make all"));
    }

    #[test]
    fn test_sequence_handles_multiline_text() {
        let seq = osc52_sequence("line one\nline two");
        // Raw newlines never appear inside the escape
        assert!(!seq.contains('\n'));
    }
}
