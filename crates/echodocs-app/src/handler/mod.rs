//! Message handling (Update in TEA pattern)
//!
//! `update` is a pure function over [`AppState`]: it mutates the model and
//! returns an optional follow-up message plus an optional side effect for
//! the runner to perform. Handlers never touch the network or the terminal
//! themselves.

mod echo;
mod keys;
mod update;

pub use update::update;

use crate::echo::EchoKind;
use crate::message::Message;

/// Side effects requested by `update`, executed by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fire an echo request; the result comes back as
    /// [`Message::EchoSettled`] carrying the same generation.
    SendEcho {
        kind: EchoKind,
        generation: u64,
        url: String,
        /// JSON body for POST, `None` for GET
        body: Option<String>,
    },

    /// Write text to the system clipboard.
    CopyToClipboard { text: String },

    /// Persist the theme choice to the config file.
    PersistTheme { dark: bool },
}

/// Result of handling a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Follow-up message to process immediately
    pub message: Option<Message>,

    /// Side effect for the runner
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
