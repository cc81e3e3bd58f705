//! Credential storage for the Notion integration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SettingsError;
use crate::models::application::Advisory;

/// Settings as persisted; either credential may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notion_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
}

impl StoredSettings {
    /// Both credentials, if both are present and non-empty.
    pub fn credentials(&self) -> Option<Credentials> {
        let token = self.notion_token.as_deref()?;
        let database_id = self.database_id.as_deref()?;
        Credentials::new(token, database_id).ok()
    }
}

/// A complete pair of credentials. Both values are opaque to jobnote.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    database_id: String,
}

impl Credentials {
    pub fn new(token: &str, database_id: &str) -> Result<Self, SettingsError> {
        let (token, database_id) = (token.trim(), database_id.trim());
        if token.is_empty() || database_id.is_empty() {
            return Err(SettingsError::Incomplete);
        }

        Ok(Self {
            token: token.to_string(),
            database_id: database_id.to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// The token with all but its last four characters hidden.
    pub fn masked_token(&self) -> String {
        let visible: String = self
            .token
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{visible}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.masked_token())
            .field("database_id", &self.database_id)
            .finish()
    }
}

impl From<&Credentials> for StoredSettings {
    fn from(credentials: &Credentials) -> Self {
        Self {
            notion_token: Some(credentials.token.clone()),
            database_id: Some(credentials.database_id.clone()),
        }
    }
}

/// Trait for settings persistence.
pub trait SettingsStore {
    /// Read whatever is stored. Nothing stored yet is not an error.
    fn load(&self) -> Result<StoredSettings, SettingsError>;

    /// Persist both credentials.
    fn save(&self, credentials: &Credentials) -> Result<(), SettingsError>;

    /// Complete credentials, or `None` if either is missing.
    fn credentials(&self) -> Result<Option<Credentials>, SettingsError> {
        Ok(self.load()?.credentials())
    }
}

/// Settings kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the settings file. Missing files are fine.
    pub fn clear(&self) -> Result<(), SettingsError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<StoredSettings, SettingsError> {
        if !self.path.exists() {
            debug!("No settings file at {}", self.path.display());
            return Ok(StoredSettings::default());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, credentials: &Credentials) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&StoredSettings::from(credentials))?;
        fs::write(&self.path, content)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Validate and store credentials, reporting the outcome as an advisory.
pub fn save_settings<S>(store: &S, token: &str, database_id: &str) -> Advisory
where
    S: SettingsStore + ?Sized,
{
    let credentials = match Credentials::new(token, database_id) {
        Ok(credentials) => credentials,
        Err(_) => return Advisory::error("Please fill in both settings fields"),
    };

    match store.save(&credentials) {
        Ok(()) => Advisory::success("Settings saved successfully"),
        Err(e) => {
            warn!("Failed to save settings: {}", e);
            Advisory::error(format!("Error: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_credentials_require_both_values() {
        assert!(matches!(Credentials::new("", "db"), Err(SettingsError::Incomplete)));
        assert!(matches!(Credentials::new("secret", "  "), Err(SettingsError::Incomplete)));
        assert!(Credentials::new("secret", "db").is_ok());
    }

    #[test]
    fn test_stored_settings_credentials() {
        let partial = StoredSettings {
            notion_token: Some("secret".to_string()),
            database_id: None,
        };
        assert!(partial.credentials().is_none());

        let empty_id = StoredSettings {
            notion_token: Some("secret".to_string()),
            database_id: Some(String::new()),
        };
        assert!(empty_id.credentials().is_none());
    }

    #[test]
    fn test_debug_masks_token() {
        let credentials = Credentials::new("secret_abcdef1234", "db").unwrap();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("secret_abcdef"));
        assert!(debug.contains("****1234"));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

        assert_eq!(store.load().unwrap(), StoredSettings::default());
        assert!(store.credentials().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("nested").join("settings.json"));

        let advisory = save_settings(&store, " secret ", "db-123");
        assert_eq!(advisory, Advisory::success("Settings saved successfully"));

        let credentials = store.credentials().unwrap().unwrap();
        assert_eq!(credentials.token(), "secret");
        assert_eq!(credentials.database_id(), "db-123");

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"notionToken\""));
        assert!(raw.contains("\"databaseId\""));
    }

    #[test]
    fn test_save_settings_refuses_incomplete() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

        let advisory = save_settings(&store, "secret", "");
        assert_eq!(advisory, Advisory::error("Please fill in both settings fields"));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileSettingsStore::new(&path);
        assert!(matches!(store.load(), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

        store.clear().unwrap();
        save_settings(&store, "secret", "db");
        store.clear().unwrap();
        assert!(store.credentials().unwrap().is_none());
    }
}
