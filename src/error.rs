//! Error types for Memopad

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the capture and inbox layers
///
/// The classification engine itself never fails; these cover the
/// collaborators around it.
#[derive(Debug, Error)]
pub enum MemopadError {
    #[error("Nothing to capture")]
    NothingToCapture,

    #[error("Inbox path '{0}' exists but is not a regular file")]
    InboxNotAFile(PathBuf),

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    InvalidDate(String),
}
