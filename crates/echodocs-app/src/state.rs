//! Application state (Model in TEA pattern)
//!
//! Everything user-driven lives here, owned by the top-level loop and
//! passed by reference to handlers and the renderer. Nothing is ambient:
//! the filter engine and echo harness are testable without a terminal.

use std::time::{Duration, Instant};

use echodocs_core::{filter, Block, ContentStore, Section};

use crate::echo::{EchoHarness, ECHO_PATH};

/// How long the copy toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_millis(1200);

/// At most this many code blocks get copy shortcuts (keys 1-9).
pub const MAX_COPY_SLOTS: usize = 9;

/// Which part of the UI receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal key routing: navigation, harness triggers, copy shortcuts
    #[default]
    Browse,

    /// Typing into the search query line
    SearchInput,

    /// Typing into the POST harness input
    PostInput,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Transient confirmation notice, auto-dismissed after [`TOAST_TTL`].
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    raised_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= TOAST_TTL
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// The parsed content document; read-only after load
    pub store: ContentStore,

    /// Echo endpoint base, e.g. `http://127.0.0.1:8080`
    pub endpoint: String,

    /// Current search query (raw; normalization happens in the filter)
    pub query: String,

    /// Where typed characters go
    pub input_mode: InputMode,

    /// Highlighted section id (the fragment analog)
    pub selected_id: String,

    /// Cursor position within the filtered TOC list
    pub toc_cursor: usize,

    /// Manual scroll offset below the anchored section, in lines
    pub scroll: u16,

    /// Dark theme flag
    pub dark: bool,

    /// GET/POST echo slots and the POST input
    pub echo: EchoHarness,

    /// Active copy confirmation notice, if any
    pub toast: Option<Toast>,

    /// Lifecycle phase
    pub phase: AppPhase,
}

impl AppState {
    pub fn new(store: ContentStore, endpoint: impl Into<String>, dark: bool) -> Self {
        let selected_id = store.first_id().unwrap_or_default().to_string();
        Self {
            store,
            endpoint: endpoint.into(),
            query: String::new(),
            input_mode: InputMode::Browse,
            selected_id,
            toc_cursor: 0,
            scroll: 0,
            dark,
            echo: EchoHarness::default(),
            toast: None,
            phase: AppPhase::Running,
        }
    }

    /// Override the initial anchor (from `--section`). Unknown ids are
    /// kept: the renderer falls back to the first visible section.
    pub fn with_initial_section(mut self, id: Option<String>) -> Self {
        if let Some(id) = id {
            self.selected_id = id;
            self.align_cursor_to_selection();
        }
        self
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    /// Sections visible under the current query, in document order.
    pub fn filtered(&self) -> Vec<&Section> {
        filter(self.store.sections(), &self.query)
    }

    /// Literal code texts of the visible code blocks, in render order,
    /// capped at [`MAX_COPY_SLOTS`]. Index n is what key (n+1) copies.
    pub fn visible_code_blocks(&self) -> Vec<&str> {
        self.filtered()
            .iter()
            .flat_map(|section| section.blocks.iter())
            .filter_map(|block| match block {
                Block::Code { code, .. } => Some(code.as_str()),
                _ => None,
            })
            .take(MAX_COPY_SLOTS)
            .collect()
    }

    /// Full URL for the echo requests.
    pub fn echo_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), ECHO_PATH)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    pub fn toc_up(&mut self) {
        self.toc_cursor = self.toc_cursor.saturating_sub(1);
    }

    pub fn toc_down(&mut self) {
        let len = self.filtered().len();
        if len > 0 && self.toc_cursor + 1 < len {
            self.toc_cursor += 1;
        }
    }

    /// Activate the TOC entry under the cursor: the highlighted id and the
    /// content anchor both move to it.
    pub fn activate_cursor_entry(&mut self) {
        let id = self
            .filtered()
            .get(self.toc_cursor)
            .map(|s| s.id.clone());
        if let Some(id) = id {
            self.selected_id = id;
            self.scroll = 0;
        }
    }

    /// Out-of-band anchor change: only the highlighted id (and the scroll
    /// anchor) move; the TOC cursor stays where the user left it.
    pub fn jump_to(&mut self, id: &str) {
        self.selected_id = id.to_string();
        self.scroll = 0;
    }

    /// Clamp the cursor after the filtered list shrinks.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.toc_cursor = 0;
        } else if self.toc_cursor >= len {
            self.toc_cursor = len - 1;
        }
    }

    fn align_cursor_to_selection(&mut self) {
        if let Some(pos) = self
            .filtered()
            .iter()
            .position(|s| s.id == self.selected_id)
        {
            self.toc_cursor = pos;
        }
    }

    pub fn scroll_by(&mut self, lines: i32) {
        if lines < 0 {
            self.scroll = self.scroll.saturating_sub(lines.unsigned_abs() as u16);
        } else {
            self.scroll = self.scroll.saturating_add(lines as u16);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Toast helpers
    // ─────────────────────────────────────────────────────────

    pub fn raise_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once its display window has passed. Called on Tick.
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
