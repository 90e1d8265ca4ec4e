//! echodocs - a terminal viewer for HTTP library documentation
//!
//! Binary entry point. Loads the content document, resolves the initial
//! theme, and hands control to the TUI runner.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use url::Url;

use echodocs_app::config::{self, ThemeChoice};
use echodocs_app::state::AppState;
use echodocs_app::transport::HttpTransport;
use echodocs_core::{logging, ContentStore};

/// Documentation viewer with a live echo harness
#[derive(Parser, Debug)]
#[command(name = "echodocs")]
#[command(about = "Browse library documentation and poke its echo API", long_about = None)]
struct Args {
    /// Path to the sections document
    #[arg(value_name = "FILE", default_value = "sections.json")]
    content: PathBuf,

    /// Section id to open at startup
    #[arg(long, value_name = "ID")]
    section: Option<String>,

    /// Base URL of the server backing the echo harness
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:8080")]
    endpoint: String,

    /// Theme override, wins over the saved preference
    #[arg(long, value_parser = ["dark", "light"])]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let endpoint = match Url::parse(&args.endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            args.endpoint.trim_end_matches('/').to_string()
        }
        Ok(url) => {
            eprintln!("error: endpoint must be http or https, got {}", url.scheme());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            eprintln!("error: invalid endpoint URL {:?}: {e}", args.endpoint);
            return Ok(ExitCode::FAILURE);
        }
    };

    let store = match ContentStore::load(&args.content) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!(
                "Hint: pass the path to a sections document, e.g. echodocs demos/sections.json"
            );
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::info!(
        sections = store.sections().len(),
        path = %args.content.display(),
        "content loaded"
    );

    let prefs = config::load_preferences();
    let cli_theme = args.theme.as_deref().map(|t| match t {
        "light" => ThemeChoice::Light,
        _ => ThemeChoice::Dark,
    });
    let dark = config::resolve_initial_dark(&prefs, cli_theme);

    let state = AppState::new(store, endpoint, dark).with_initial_section(args.section);
    echodocs_tui::run(state, HttpTransport::new()).await?;

    Ok(ExitCode::SUCCESS)
}
