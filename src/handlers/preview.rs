//! Preview handler for Memopad

use crate::MemopadServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl MemopadServerHandler {
    /// Renders the line a capture would write, without touching the inbox.
    pub async fn handle_preview(&self, text: String) -> McpResult<String> {
        Ok(formatting::render_preview(&text, &self.settings.capture))
    }
}
