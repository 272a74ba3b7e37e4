//! Persistent user settings
//!
//! Settings live in a TOML file. Every field is optional; anything missing
//! takes its built-in default.
//!
//! ```toml
//! inbox_file_path = "Memopad.md"
//! default_category = "personal"
//! task_keywords = ["fix", "call", "buy"]
//! entry_types = ["note", "idea", "log", "task"]
//!
//! [[categories]]
//! name = "work"
//! keywords = ["jira", "deploy"]
//! ```

use crate::memo::CaptureConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_INBOX_FILE: &str = "Memopad.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Markdown file captured entries are appended to
    pub inbox_file_path: PathBuf,
    /// Classification rules
    #[serde(flatten)]
    pub capture: CaptureConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inbox_file_path: PathBuf::from(DEFAULT_INBOX_FILE),
            capture: CaptureConfig::default(),
        }
    }
}

impl Settings {
    /// Platform settings location, e.g. `~/.config/memopad/config.toml`
    ///
    /// Falls back to `memopad.toml` in the working directory when the
    /// platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("memopad").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("memopad.toml"))
    }

    /// Load settings, returning defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings in {}", path.display()))?;
        settings.normalize();
        Ok(settings)
    }

    /// Write settings as pretty TOML, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }

    /// Apply the same cleanup the settings editor performs on user input
    pub fn normalize(&mut self) {
        if self.inbox_file_path.as_os_str().is_empty() {
            self.inbox_file_path = PathBuf::from(DEFAULT_INBOX_FILE);
        }
        self.capture.normalize();
    }

    /// Human-readable summary of the active configuration
    pub fn describe(&self) -> String {
        let config = &self.capture;
        let mut result = format!("Inbox: {}\n", self.inbox_file_path.display());
        result.push_str(&format!("Entry types: {}\n", config.entry_types.join(", ")));
        result.push_str(&format!("Task keywords: {}\n", config.task_keywords.join(", ")));
        result.push_str(&format!("Default category: {}\n", config.default_category));

        if config.categories.is_empty() {
            result.push_str("Categories: (none)\n");
        } else {
            result.push_str("Categories:\n");
            for category in &config.categories {
                result.push_str(&format!(
                    "- {}: {}\n",
                    category.name,
                    category.keywords.join(", ")
                ));
            }
        }
        result
    }
}
