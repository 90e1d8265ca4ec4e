//! Plain-text extraction from pre-sanitized rich text
//!
//! Paragraph and list content arrives as trusted HTML fragments. The TUI
//! renders plain text, and search matches against text content, so both
//! paths share this stripper.

use std::sync::OnceLock;

use regex::Regex;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid tag pattern"))
}

/// Strip markup tags and decode the handful of entities the document
/// author actually uses. Unrecognized entities pass through untouched.
pub fn strip_html(html: &str) -> String {
    let stripped = tag_pattern().replace_all(html, "");
    stripped
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
