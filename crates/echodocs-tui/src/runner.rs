//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal, the message channel, and the side-effect execution.
//! `update` stays pure; everything async (echo requests, theme persistence)
//! is spawned here and reports back through the channel as messages.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use echodocs_app::handler::{self, UpdateAction};
use echodocs_app::message::Message;
use echodocs_app::state::AppState;
use echodocs_app::transport::EchoTransport;
use echodocs_app::{config, Clipboard};
use echodocs_core::prelude::*;

use crate::clipboard::Osc52Clipboard;
use crate::{event, render};

/// Install a panic hook that restores the terminal before the report prints.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Send Message::Quit on Ctrl-C delivered as a signal (outside raw mode).
fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = msg_tx.send(Message::Quit).await;
        }
    });
}

/// Run the viewer until the user quits.
pub async fn run<T>(mut state: AppState, transport: T) -> Result<()>
where
    T: EchoTransport + Send + Sync + 'static,
{
    install_panic_hook();
    let mut term = ratatui::init();

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    spawn_signal_handler(msg_tx.clone());

    let transport = Arc::new(transport);
    let clipboard: Arc<dyn Clipboard + Send + Sync> = Arc::new(Osc52Clipboard);

    let result = run_loop(
        &mut term,
        &mut state,
        &mut msg_rx,
        &msg_tx,
        &transport,
        &clipboard,
    );

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<T>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    transport: &Arc<T>,
    clipboard: &Arc<dyn Clipboard + Send + Sync>,
) -> Result<()>
where
    T: EchoTransport + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Drain messages from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, transport, clipboard);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, transport, clipboard);
        }
    }

    Ok(())
}

/// Run a message (and its follow-ups) through the update function,
/// executing any requested side effects.
fn process_message<T>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    transport: &Arc<T>,
    clipboard: &Arc<dyn Clipboard + Send + Sync>,
) where
    T: EchoTransport + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, transport, clipboard);
        }

        msg = result.message;
    }
}

fn handle_action<T>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    transport: &Arc<T>,
    clipboard: &Arc<dyn Clipboard + Send + Sync>,
) where
    T: EchoTransport + Send + Sync + 'static,
{
    match action {
        UpdateAction::SendEcho {
            kind,
            generation,
            url,
            body,
        } => {
            let transport = Arc::clone(transport);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let outcome = match body {
                    Some(body) => transport.post_json(&url, body).await,
                    None => transport.get(&url).await,
                };
                if tx
                    .send(Message::EchoSettled {
                        kind,
                        generation,
                        outcome,
                    })
                    .await
                    .is_err()
                {
                    warn!("message channel closed before echo completion");
                }
            });
        }

        UpdateAction::CopyToClipboard { text } => {
            let ok = match clipboard.write_text(&text) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "clipboard write failed");
                    false
                }
            };
            if msg_tx.try_send(Message::CopyFinished { ok }).is_err() {
                warn!("message channel full, dropping copy confirmation");
            }
        }

        UpdateAction::PersistTheme { dark } => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = config::save_theme(dark) {
                    warn!(error = %e, "failed to persist theme choice");
                }
            });
        }
    }
}
