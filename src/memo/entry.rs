use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Marker placed in front of a rendered due date
pub const DATE_MARKER: &str = "📅";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Outcome of classifying one line of input
///
/// `formatted` is the entry body that follows the list marker in the inbox.
/// `is_task` selects the checkbox marker (`- [ ] `) instead of a plain
/// list item (`- `).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Entry body, e.g. `[task:work] deploy api 📅 2025-03-15`
    pub formatted: String,
    /// Whether the entry is rendered as a checkbox
    pub is_task: bool,
}

impl ClassificationResult {
    pub(crate) fn note(tag: &str, content: &str) -> Self {
        Self {
            formatted: format!("[{}] {}", tag, content),
            is_task: false,
        }
    }

    pub(crate) fn task(category: &str, extraction: &DateExtraction) -> Self {
        Self {
            formatted: format!(
                "[task:{}] {}{}",
                category,
                extraction.cleaned_input,
                extraction.date_stamp()
            ),
            is_task: true,
        }
    }
}

/// Outcome of scanning text for a date phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateExtraction {
    /// Resolved calendar date, `None` when no phrase matched
    pub due: Option<NaiveDate>,
    /// Input with the matched phrase removed
    ///
    /// Unchanged (not even trimmed) when nothing matched.
    pub cleaned_input: String,
}

impl DateExtraction {
    /// Render the due-date suffix appended to task entries
    ///
    /// Returns an empty string when no date was found, otherwise
    /// `" 📅 YYYY-MM-DD"`. The leading space separates the stamp from the
    /// cleaned text it follows.
    pub fn date_stamp(&self) -> String {
        match self.due {
            Some(date) => format!(" {} {}", DATE_MARKER, date.format("%Y-%m-%d")),
            None => String::new(),
        }
    }
}
