//! Application layer for echodocs
//!
//! TEA-shaped core: [`state::AppState`] is the model, [`message::Message`]
//! the events, [`handler::update`] the pure transition function. Side
//! effects come back as [`handler::UpdateAction`] values for the runner to
//! execute, and async request completions re-enter as messages. The crate
//! knows nothing about terminals; rendering lives in echodocs-tui.

pub mod clipboard;
pub mod config;
pub mod echo;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod transport;

pub use clipboard::Clipboard;
pub use config::{load_preferences, resolve_initial_dark, save_theme, Preferences, ThemeChoice};
pub use echo::{EchoHarness, EchoKind, EchoOutcome, EchoSlot, RequestPhase};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, InputMode, Toast};
pub use transport::{EchoTransport, HttpTransport};
