//! Content document model and loading
//!
//! The viewer renders a single JSON document: an ordered array of sections,
//! each carrying an ordered list of typed content blocks. The document is
//! parsed once at startup and never mutated afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};

/// A top-level documentation entry.
///
/// `id` doubles as the navigation anchor; it is expected to be unique and
/// non-empty, but the document is authored out of band so violations are
/// only warned about, never rejected.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One unit of rendered content within a section.
///
/// Closed tagged union keyed by the document's `type` field. Unrecognized
/// tags deserialize to [`Block::Unknown`], which renders nothing and never
/// matches a search query.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// A visual separator with no payload.
    Hr,

    /// Pre-sanitized rich text. The source is trusted; the TUI strips the
    /// markup down to plain text for display and matching.
    Paragraph { html: String },

    /// A bulleted list; each item is pre-sanitized rich text.
    List { items: Vec<String> },

    /// A literal code sample with a language tag and optional caption.
    Code {
        lang: String,
        #[serde(default)]
        caption: Option<String>,
        code: String,
    },

    /// Renders the GET side of the live echo harness.
    EchoGet,

    /// Renders the POST side of the live echo harness.
    EchoPost,

    /// Any tag this build does not know about. Silently ignored.
    #[serde(other)]
    Unknown,
}

/// The parsed content document. Read-only after [`ContentStore::load`].
#[derive(Debug, Clone)]
pub struct ContentStore {
    sections: Vec<Section>,
    path: PathBuf,
}

impl ContentStore {
    /// Load and parse the content document from a JSON file.
    ///
    /// Fetch or parse failure is fatal to startup: without the document
    /// there is nothing to render.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ContentNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::load(path, format!("read failed: {e}")))?;
        let sections = Self::parse(&raw).map_err(|e| Error::load(path, e.to_string()))?;
        Ok(Self {
            sections,
            path: path.to_path_buf(),
        })
    }

    /// Parse a JSON array of sections. Used by [`Self::load`] and by tests
    /// that build a store from an in-memory document.
    pub fn parse(raw: &str) -> serde_json::Result<Vec<Section>> {
        let sections: Vec<Section> = serde_json::from_str(raw)?;
        check_ids(&sections);
        Ok(sections)
    }

    /// Build a store directly from parsed sections (tests, fixtures).
    pub fn from_sections(sections: Vec<Section>) -> Self {
        check_ids(&sections);
        Self {
            sections,
            path: PathBuf::new(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Id of the first section, the default navigation anchor.
    pub fn first_id(&self) -> Option<&str> {
        self.sections.first().map(|s| s.id.as_str())
    }

    /// Look up a section by its anchor id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Warn about empty or duplicate section ids. The document is produced out
/// of band, so this is diagnostics only.
fn check_ids(sections: &[Section]) {
    let mut seen = HashSet::new();
    for section in sections {
        if section.id.is_empty() {
            warn!("section {:?} has an empty id", section.title);
        }
        if !seen.insert(section.id.as_str()) {
            warn!("duplicate section id {:?}", section.id);
        }
    }
}
