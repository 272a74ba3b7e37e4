//! Memopad domain models and capture rules
//!
//! This module contains the pure classification engine. It is split into
//! submodules for better organization:
//! - `config`: Classification configuration (entry types, categories, keywords)
//! - `entry`: Result types produced by a capture
//! - `classifier`: Ordered rule table deciding note vs. task and category
//! - `date_extractor`: Ordered date-phrase table resolving due dates

mod classifier;
mod config;
mod date_extractor;
mod entry;

// Re-export all public types
pub use classifier::{classify, classify_on};
pub use config::{CaptureConfig, Category};
pub use date_extractor::{extract_date, extract_date_on};
pub use entry::{ClassificationResult, DATE_MARKER, DateExtraction, local_date_today};
