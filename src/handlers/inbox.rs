//! Inbox review handler for Memopad

use crate::MemopadServerHandler;
use crate::error::MemopadError;
use crate::formatting;
use chrono::NaiveDate;
use mcp_attr::{Result as McpResult, bail_public};

impl MemopadServerHandler {
    /// Shows the inbox document, or a single day's section of it.
    pub async fn handle_inbox(&self, date: Option<String>) -> McpResult<String> {
        // Parse and validate date filter
        let date_filter = if let Some(ref date_str) = date {
            match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
                Ok(d) => Some(d),
                Err(_) => {
                    bail_public!(_, "{}", MemopadError::InvalidDate(date_str.clone()));
                }
            }
        } else {
            None
        };

        let content = match self.read_inbox() {
            Ok(content) => content,
            Err(e) => {
                bail_public!(_, "Failed to read inbox: {:#}", e);
            }
        };

        if content.trim().is_empty() {
            return Ok("Inbox is empty".to_string());
        }

        match date_filter {
            Some(day) => Ok(formatting::day_section(&content, day)
                .unwrap_or_else(|| format!("No entries captured on {}", day))),
            None => Ok(content),
        }
    }
}
