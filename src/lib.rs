//! Memopad Library
//!
//! This library turns one line of free-form text into a categorized inbox
//! entry (a note, idea, log entry, or task with category and due date) and
//! appends it to a markdown inbox grouped by day. It is exposed as a Model
//! Context Protocol (MCP) server and a small command-line tool.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `MemopadServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `memo` module - Pure classification and date extraction
//! - **Persistence Layer**: `storage` and `settings` modules - Markdown inbox with
//!   optional Git sync, TOML settings
//!
//! # Example
//!
//! ```
//! use memopad::{CaptureConfig, classify};
//!
//! let result = classify("idea: offline mode", &CaptureConfig::default());
//! assert_eq!(result.formatted, "[idea] offline mode");
//! assert!(!result.is_task);
//! ```

pub mod error;
pub mod formatting;
mod git_ops;
pub mod handlers;
pub mod memo;
pub mod settings;
pub mod storage;

use anyhow::{Result, anyhow};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::Mutex;

// Re-export commonly used types
pub use error::MemopadError;
pub use memo::{
    CaptureConfig, Category, ClassificationResult, DateExtraction, classify, classify_on,
    extract_date, extract_date_on, local_date_today,
};
pub use settings::Settings;
pub use storage::InboxStorage;

/// MCP Server handler for quick capture
///
/// Holds an immutable settings snapshot and the inbox storage. Captures are
/// serialized through the storage mutex so concurrent calls never interleave
/// writes to the inbox file.
pub struct MemopadServerHandler {
    pub(crate) settings: Settings,
    pub(crate) storage: Mutex<InboxStorage>,
}

impl MemopadServerHandler {
    /// Create a new Memopad server handler
    ///
    /// # Arguments
    /// * `settings` - Classification rules and inbox location
    /// * `sync_git` - Enable automatic Git synchronization of the inbox
    ///
    /// # Example
    /// ```no_run
    /// # use memopad::{MemopadServerHandler, Settings};
    /// let handler = MemopadServerHandler::new(Settings::default(), false);
    /// ```
    pub fn new(settings: Settings, sync_git: bool) -> Self {
        let storage = Mutex::new(InboxStorage::new(&settings.inbox_file_path, sync_git));
        Self { settings, storage }
    }

    /// Create a handler from a settings file, optionally overriding the inbox path
    pub fn from_settings_file(
        settings_path: impl AsRef<Path>,
        inbox_override: Option<&Path>,
        sync_git: bool,
    ) -> Result<Self> {
        let mut settings = Settings::load(settings_path)?;
        if let Some(inbox) = inbox_override {
            settings.inbox_file_path = inbox.to_path_buf();
        }
        Ok(Self::new(settings, sync_git))
    }

    /// Classify `text` and append it to the inbox under today's header
    ///
    /// # Returns
    /// The classification that was written, or `MemopadError::NothingToCapture`
    /// for blank input
    pub fn capture_entry(&self, text: &str) -> Result<ClassificationResult> {
        let input = text.trim();
        if input.is_empty() {
            return Err(MemopadError::NothingToCapture.into());
        }

        let result = classify(input, &self.settings.capture);
        let storage = self
            .storage
            .lock()
            .map_err(|_| anyhow!("Inbox storage lock poisoned"))?;
        storage.append(&result.formatted, result.is_task, local_date_today())?;
        Ok(result)
    }

    /// Read the current inbox document
    pub fn read_inbox(&self) -> Result<String> {
        let storage = self
            .storage
            .lock()
            .map_err(|_| anyhow!("Inbox storage lock poisoned"))?;
        storage.read()
    }
}

/// Quick-capture inbox for notes, ideas, log entries and tasks.
///
/// Type naturally and Memopad files the line into a markdown inbox under
/// today's `## YYYY-MM-DD` header:
/// - **Typed notes**: `note: ...`, `idea: ...`, `log: ...` become `[idea] ...`
/// - **Tasks**: `task: ...`, a category prefix like `work: ...`, or a leading
///   task keyword like `fix ...` become checkbox lines `[task:<category>] ...`
/// - **Due dates**: today, tomorrow, yesterday, in N days/weeks/months,
///   next/this <weekday>, <weekday>, next week are turned into `📅 YYYY-MM-DD`
/// - Anything else is stored as `[note] ...`
#[mcp_server]
impl McpServer for MemopadServerHandler {
    /// **Capture**: File one line of text into the inbox. Classification happens automatically.
    /// **Examples**: "fix login bug tomorrow", "idea: offline mode", "work: review sprint board friday".
    #[tool]
    async fn capture(
        &self,
        /// Text to capture, written the way you would say it
        text: String,
    ) -> McpResult<String> {
        self.handle_capture(text).await
    }

    /// **Preview**: Show the line a capture would write, without saving anything.
    #[tool]
    async fn preview(
        &self,
        /// Text to classify
        text: String,
    ) -> McpResult<String> {
        self.handle_preview(text).await
    }

    /// **Settings**: Show entry types, task keywords, categories and the inbox path in use.
    #[tool]
    async fn settings(&self) -> McpResult<String> {
        self.handle_settings().await
    }

    /// **Review**: Show the inbox, or only the entries captured on one day.
    #[tool]
    async fn inbox(
        &self,
        /// Day to show: YYYY-MM-DD (optional, default: whole inbox)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_inbox(date).await
    }
}
