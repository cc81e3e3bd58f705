//! Subcommands and the file locations they share.

pub mod config;
pub mod parse;
pub mod settings;
pub mod submit;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use jobnote_core::{ApplicationForm, JobnoteConfig, JsonFileSettingsStore};

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobnote")
}

pub fn default_config_path() -> PathBuf {
    app_dir().join("config.json")
}

pub fn default_settings_path() -> PathBuf {
    app_dir().join("settings.json")
}

/// Resolve the config file path from the global flag.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration. An explicit path must exist; the default one may not.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<JobnoteConfig> {
    if let Some(path) = explicit {
        return Ok(JobnoteConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(JobnoteConfig::from_file(&path)?)
    } else {
        Ok(JobnoteConfig::default())
    }
}

pub fn settings_store(explicit: Option<&str>) -> JsonFileSettingsStore {
    JsonFileSettingsStore::new(explicit.map(PathBuf::from).unwrap_or_else(default_settings_path))
}

/// Load a saved form, or start a new one dated today.
pub fn load_form(path: Option<&Path>, stage: &str) -> anyhow::Result<ApplicationForm> {
    match path {
        Some(path) if path.exists() => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        _ => Ok(ApplicationForm::today(stage)),
    }
}

pub fn save_form(path: &Path, form: &ApplicationForm) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(form)?)?;
    debug!("Saved form to {}", path.display());
    Ok(())
}
