use crate::error::MemopadError;
use crate::formatting::{date_header, render_entry_line};
use crate::git_ops::GitSync;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Title written when the inbox is created
pub const INBOX_TITLE: &str = "# Memopad Inbox";

/// Append-only markdown inbox grouped under `## YYYY-MM-DD` headers
pub struct InboxStorage {
    file_path: PathBuf,
    git: Option<GitSync>,
}

impl InboxStorage {
    /// Create a storage for `file_path`
    ///
    /// # Arguments
    /// * `file_path` - Markdown inbox file; created on first capture
    /// * `sync_git` - Commit and push the inbox after each capture
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git = sync_git.then(|| GitSync::discover(&file_path));
        Self { file_path, git }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole inbox, or an empty string if it does not exist yet
    pub fn read(&self) -> Result<String> {
        if !self.file_path.exists() {
            return Ok(String::new());
        }
        self.ensure_regular_file()?;
        fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read inbox {}", self.file_path.display()))
    }

    /// Append one classified entry under the header for `today`
    ///
    /// Creates the inbox if missing, inserts directly below an existing
    /// header for the same day, or opens a new section at the end.
    pub fn append(&self, formatted: &str, is_task: bool, today: NaiveDate) -> Result<()> {
        self.pull();

        let line = render_entry_line(formatted, is_task);
        let header = date_header(today);

        let content = if self.file_path.exists() {
            let existing = self.read()?;
            insert_entry(&existing, &header, &line)
        } else {
            format!("{}\n\n{}\n{}", INBOX_TITLE, header, line)
        };

        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write inbox {}", self.file_path.display()))?;
        tracing::info!(path = %self.file_path.display(), is_task, "captured entry");

        let kind = if is_task { "task" } else { "note" };
        self.record(&format!("Capture {}: {}", kind, formatted));
        Ok(())
    }

    fn ensure_regular_file(&self) -> Result<()> {
        if !self.file_path.is_file() {
            return Err(MemopadError::InboxNotAFile(self.file_path.clone()).into());
        }
        Ok(())
    }

    fn pull(&self) {
        if let Some(git) = &self.git
            && let Err(e) = git.fast_forward()
        {
            tracing::warn!("Git fast-forward before capture failed: {:#}", e);
        }
    }

    fn record(&self, message: &str) {
        let Some(git) = &self.git else {
            return;
        };
        if let Err(e) = git.commit(&self.file_path, message) {
            tracing::warn!("Git commit of inbox failed: {:#}", e);
            return;
        }
        if let Err(e) = git.push() {
            tracing::warn!("Git push of inbox failed: {:#}", e);
        }
    }
}

/// Place `line` in `content` under `header`
///
/// Only a line exactly equal to `header` counts as the day's section.
fn insert_entry(content: &str, header: &str, line: &str) -> String {
    let mut offset = 0;
    for existing in content.split_inclusive('\n') {
        if existing.trim_end_matches(['\r', '\n']) == header {
            let end = offset + existing.len();
            let separator = if existing.ends_with('\n') { "" } else { "\n" };
            return format!(
                "{}{}{}{}",
                &content[..end],
                separator,
                line,
                &content[end..]
            );
        }
        offset += existing.len();
    }

    format!("{}\n\n{}\n{}", content.trim_end(), header, line)
}
