//! Settings handler for Memopad

use crate::MemopadServerHandler;
use mcp_attr::Result as McpResult;

impl MemopadServerHandler {
    /// Describes the active classification rules and inbox location.
    pub async fn handle_settings(&self) -> McpResult<String> {
        Ok(self.settings.describe())
    }
}
