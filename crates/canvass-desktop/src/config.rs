use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use specta::Type;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const ENV_API_BASE_URL: &str = "CANVASS_API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct AppConfig {
    /// Root URL of the survey generation service.
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.canvass.desktop"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Resolve the effective config: the `CANVASS_API_BASE_URL` environment
/// variable wins, then the on-disk config, then the default local URL.
pub fn resolve() -> AppConfig {
    let mut config = load().unwrap_or_default();
    if let Ok(base_url) = std::env::var(ENV_API_BASE_URL)
        && !base_url.is_empty()
    {
        config.api_base_url = base_url;
    }
    config
}

fn load() -> Option<AppConfig> {
    let path = config_path().ok()?;
    let contents = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

pub fn save(config: &AppConfig) -> eyre::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(config)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
