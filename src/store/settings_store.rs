use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths;
use crate::config::settings::Settings;

const SETTINGS_FILE: &str = "settings.json";

fn settings_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join(SETTINGS_FILE))
}

pub fn load_settings() -> Settings {
    settings_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) {
    let Some(path) = settings_path() else {
        tracing::warn!("no config directory, settings not saved");
        return;
    };
    save_to(&path, settings);
}

fn load_from(path: &Path) -> Settings {
    let Ok(data) = fs::read_to_string(path) else {
        return Settings::default();
    };
    serde_json::from_str(&data).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "ignoring unreadable settings: {e}");
        Settings::default()
    })
}

fn save_to(path: &Path, settings: &Settings) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            tracing::warn!(path = %parent.display(), "cannot create config dir: {e}");
            return;
        }
    }
    let result = serde_json::to_string_pretty(settings)
        .map_err(|e| e.to_string())
        .and_then(|data| fs::write(path, data).map_err(|e| e.to_string()));
    if let Err(e) = result {
        tracing::warn!(path = %path.display(), "cannot save settings: {e}");
    }
}
