//! Preference persistence (theme)
//!
//! One durable key: `theme`, holding `"dark"` or `"light"` in
//! `~/.config/echodocs/config.toml`. Read once at startup, written on
//! every toggle. Writes are best-effort -- a failed save is logged and
//! the in-memory flag stays authoritative for the session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use echodocs_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";

/// Persisted preferences. Only the theme today; keep the struct so new
/// keys stay backward compatible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeChoice>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeChoice::Dark)
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeChoice::Dark
        } else {
            ThemeChoice::Light
        }
    }
}

/// Default preferences file location.
pub fn preferences_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("echodocs").join(CONFIG_FILENAME)
}

/// Load preferences from the default location. Missing or unreadable
/// files yield defaults; a malformed file is warned about and ignored.
pub fn load_preferences() -> Preferences {
    load_preferences_from(&preferences_path())
}

pub fn load_preferences_from(path: &Path) -> Preferences {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return Preferences::default();
    };
    match toml::from_str(&raw) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!("ignoring malformed preferences at {}: {e}", path.display());
            Preferences::default()
        }
    }
}

/// Persist the theme flag to the default location.
pub fn save_theme(dark: bool) -> Result<()> {
    save_theme_to(&preferences_path(), dark)
}

pub fn save_theme_to(path: &Path, dark: bool) -> Result<()> {
    // Preserve any future keys by rewriting on top of the loaded file.
    let mut prefs = load_preferences_from(path);
    prefs.theme = Some(ThemeChoice::from_dark(dark));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(&prefs)
        .map_err(|e| Error::config(format!("serialize preferences: {e}")))?;
    std::fs::write(path, raw)?;
    Ok(())
}

/// Terminal analog of the host color-scheme preference.
///
/// `COLORFGBG` is set by several terminal emulators to "<fg>;<bg>"; a high
/// background index (7 or 15) means a light background. Absent or odd
/// values default to dark.
pub fn detect_system_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => !matches!(value.rsplit(';').next(), Some("7") | Some("15")),
        Err(_) => true,
    }
}

/// Resolve the initial theme flag: CLI override, else persisted
/// preference, else the environment heuristic.
pub fn resolve_initial_dark(prefs: &Preferences, cli_override: Option<ThemeChoice>) -> bool {
    if let Some(choice) = cli_override {
        return choice.is_dark();
    }
    match prefs.theme {
        Some(choice) => choice.is_dark(),
        None => detect_system_dark(),
    }
}
