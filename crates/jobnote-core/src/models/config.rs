//! Configuration structures.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{JobnoteError, Result};
use crate::posting::rules::position::DEFAULT_SCAN_LINES;
use crate::submit::notion::{NOTION_PAGES_URL, NOTION_VERSION};

/// Main configuration for jobnote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobnoteConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Notion API configuration.
    pub notion: NotionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of leading lines scanned for a job title.
    pub position_scan_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            position_scan_lines: DEFAULT_SCAN_LINES,
        }
    }
}

/// Notion API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Endpoint that creates a database page.
    pub api_url: String,

    /// Value of the `Notion-Version` header.
    pub api_version: String,

    /// Stage given to a new application.
    pub default_stage: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_url: NOTION_PAGES_URL.to_string(),
            api_version: NOTION_VERSION.to_string(),
            default_stage: "Applied".to_string(),
        }
    }
}

impl JobnoteConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| JobnoteError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
