//! Capture handler for Memopad

use crate::MemopadServerHandler;
use crate::error::MemopadError;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl MemopadServerHandler {
    /// **Capture**: Classify one line of text and append it to the inbox.
    /// **When**: Anything crosses your mind - a task, an idea, a log line.
    /// **Result**: The exact line written, e.g. `- [ ] [task:work] deploy api 📅 2025-03-15`.
    pub async fn handle_capture(&self, text: String) -> McpResult<String> {
        match self.capture_entry(&text) {
            Ok(result) => Ok(format!(
                "Captured to memopad: {}",
                formatting::render_entry_line(&result.formatted, result.is_task).trim_end()
            )),
            Err(e) => {
                if let Some(MemopadError::NothingToCapture) = e.downcast_ref::<MemopadError>() {
                    bail_public!(_, "{}", MemopadError::NothingToCapture);
                }
                bail_public!(_, "Failed to save: {:#}", e);
            }
        }
    }
}
