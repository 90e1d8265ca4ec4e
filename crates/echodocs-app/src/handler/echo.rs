//! Echo harness triggers and completions

use tracing::debug;

use crate::echo::{normalize_post_body, EchoKind, EchoOutcome};
use crate::message::Message;
use crate::state::{AppState, InputMode};

use super::{UpdateAction, UpdateResult};

/// Start an echo request: mark the slot as sending and hand the runner a
/// [`UpdateAction::SendEcho`] stamped with the slot's new generation.
pub(super) fn trigger(state: &mut AppState, msg: Message) -> UpdateResult {
    let kind = match msg {
        Message::EchoGet => EchoKind::Get,
        Message::EchoPost => EchoKind::Post,
        _ => return UpdateResult::none(),
    };

    let url = state.echo_url();
    let body = match kind {
        EchoKind::Get => None,
        EchoKind::Post => Some(normalize_post_body(&state.echo.post_input)),
    };
    let generation = state.echo.slot_mut(kind).begin();
    // Submitting from the POST editor hands focus back to browsing
    state.input_mode = InputMode::Browse;

    debug!(?kind, generation, %url, "echo request started");
    UpdateResult::action(UpdateAction::SendEcho {
        kind,
        generation,
        url,
        body,
    })
}

/// Apply a finished request to its slot. Completions from superseded
/// requests carry an old generation and are dropped.
pub(super) fn settle(
    state: &mut AppState,
    kind: EchoKind,
    generation: u64,
    outcome: EchoOutcome,
) -> UpdateResult {
    if !state.echo.slot_mut(kind).settle(generation, outcome) {
        debug!(?kind, generation, "dropping stale echo completion");
    }
    UpdateResult::none()
}
