//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use memopad::{CaptureConfig, Category, MemopadServerHandler, Settings};
use tempfile::TempDir;

/// 2025-01-15, a Wednesday
pub fn wednesday() -> NaiveDate {
    date(2025, 1, 15)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Stamp suffix as appended to task entries
pub fn stamp(day: NaiveDate) -> String {
    format!(" 📅 {}", day.format("%Y-%m-%d"))
}

/// Configuration with two categories sharing a keyword
pub fn overlapping_config() -> CaptureConfig {
    CaptureConfig {
        entry_types: vec!["note".to_string(), "task".to_string()],
        categories: vec![
            Category::new("finance", &["invoice", "report"]),
            Category::new("writing", &["report", "draft"]),
        ],
        task_keywords: vec!["write".to_string(), "send".to_string()],
        default_category: "misc".to_string(),
    }
}

/// Create a test handler whose inbox lives in a temporary directory
pub fn get_test_handler() -> (MemopadServerHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings {
        inbox_file_path: temp_dir.path().join("Memopad.md"),
        ..Settings::default()
    };
    (MemopadServerHandler::new(settings, false), temp_dir)
}
