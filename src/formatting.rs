//! Formatting helper functions for Memopad
//!
//! This module renders classified entries as inbox lines and previews, and
//! slices the inbox document for display.

use crate::memo::{CaptureConfig, ClassificationResult, classify};
use chrono::NaiveDate;

/// Placeholder shown while the capture input is empty
pub const PREVIEW_PLACEHOLDER: &str = "Start typing to see preview...";

/// List marker for the given entry kind
pub fn list_marker(is_task: bool) -> &'static str {
    if is_task { "- [ ] " } else { "- " }
}

/// Render the inbox line for a classified entry, including the newline
///
/// # Examples
/// ```
/// use memopad::formatting::render_entry_line;
/// assert_eq!(render_entry_line("[note] hello", false), "- [note] hello\n");
/// assert_eq!(render_entry_line("[task:work] deploy", true), "- [ ] [task:work] deploy\n");
/// ```
pub fn render_entry_line(formatted: &str, is_task: bool) -> String {
    format!("{}{}\n", list_marker(is_task), formatted)
}

/// Render a live preview of raw, possibly partial input
///
/// Never fails: empty or whitespace-only input yields the placeholder.
pub fn render_preview(raw: &str, config: &CaptureConfig) -> String {
    let input = raw.trim();
    if input.is_empty() {
        return PREVIEW_PLACEHOLDER.to_string();
    }

    let ClassificationResult { formatted, is_task } = classify(input, config);
    format!("{}{}", list_marker(is_task), formatted)
}

/// Header line opening the inbox section of `date`
pub fn date_header(date: NaiveDate) -> String {
    format!("## {}", date.format("%Y-%m-%d"))
}

/// Extract one day's section from the inbox document
///
/// The section runs from its `## YYYY-MM-DD` header up to (not including)
/// the next `## ` header. Returns `None` if the day has no section.
pub fn day_section(content: &str, date: NaiveDate) -> Option<String> {
    let header = date_header(date);
    let mut lines = content.lines().skip_while(|line| *line != header);
    let first = lines.next()?;

    let mut section = vec![first];
    section.extend(lines.take_while(|line| !line.starts_with("## ")));
    while section.last().is_some_and(|line| line.trim().is_empty()) {
        section.pop();
    }
    Some(section.join("\n"))
}
