//! Classification rule tests
mod common;

use common::{date, overlapping_config, stamp, wednesday};
use memopad::{CaptureConfig, Category, classify, classify_on};

#[test]
fn test_unmatched_input_is_note() {
    let config = CaptureConfig::default();
    for input in [
        "remember the milk",
        "please fix the sink",
        "meeting notes from today",
        "tasks are piling up",
        "ideas are cheap",
    ] {
        let result = classify_on(input, &config, wednesday());
        assert!(!result.is_task, "{input} should be a note");
        assert_eq!(result.formatted, format!("[note] {}", input));
    }
}

#[test]
fn test_entry_type_prefixes() {
    let config = CaptureConfig::default();

    let result = classify_on("idea: llm eval harness", &config, wednesday());
    assert!(!result.is_task);
    assert_eq!(result.formatted, "[idea] llm eval harness");

    let result = classify_on("Log ran 5k in the rain", &config, wednesday());
    assert_eq!(result.formatted, "[log] ran 5k in the rain");

    let result = classify_on("NOTE:Remember the milk tomorrow", &config, wednesday());
    assert!(!result.is_task);
    assert_eq!(result.formatted, "[note] Remember the milk tomorrow");
}

#[test]
fn test_category_prefix_forces_task() {
    let config = CaptureConfig::default();

    let result = classify_on("work: water the plants", &config, wednesday());
    assert!(result.is_task);
    assert_eq!(result.formatted, "[task:work] water the plants");

    // Explicit category beats keyword inference
    let result = classify_on("personal deploy hotfix friday", &config, wednesday());
    assert!(result.is_task);
    assert_eq!(
        result.formatted,
        format!("[task:personal] deploy hotfix{}", stamp(date(2025, 1, 17)))
    );
}

#[test]
fn test_task_prefix_infers_category() {
    let config = CaptureConfig::default();

    let result = classify_on("task: deploy api next week", &config, wednesday());
    assert!(result.is_task);
    assert_eq!(
        result.formatted,
        format!("[task:work] deploy api{}", stamp(date(2025, 1, 20)))
    );

    let result = classify_on("Task Book dentist", &config, wednesday());
    assert_eq!(result.formatted, "[task:personal] Book dentist");
}

#[test]
fn test_task_keyword_keeps_whole_input() {
    let config = CaptureConfig::default();

    let result = classify_on("call mum tomorrow", &config, wednesday());
    assert!(result.is_task);
    assert_eq!(
        result.formatted,
        format!("[task:personal] call mum{}", stamp(date(2025, 1, 16)))
    );

    let result = classify_on("email: the landlord", &config, wednesday());
    assert_eq!(result.formatted, "[task:personal] email: the landlord");

    let result = classify_on("FIX deploy script friday", &config, wednesday());
    assert_eq!(
        result.formatted,
        format!("[task:work] FIX deploy script{}", stamp(date(2025, 1, 17)))
    );
}

#[test]
fn test_keyword_must_be_whole_leading_word() {
    let config = CaptureConfig::default();
    let result = classify_on("fixed the sink", &config, wednesday());
    assert!(!result.is_task);
}

#[test]
fn test_first_configured_category_wins() {
    let config = overlapping_config();

    let result = classify_on("write quarterly report", &config, wednesday());
    assert_eq!(result.formatted, "[task:finance] write quarterly report");

    let result = classify_on("write blog draft", &config, wednesday());
    assert_eq!(result.formatted, "[task:writing] write blog draft");

    let result = classify_on("send flowers", &config, wednesday());
    assert_eq!(result.formatted, "[task:misc] send flowers");
}

#[test]
fn test_explicit_prefix_beats_task_keyword() {
    let config = CaptureConfig {
        entry_types: vec!["review".to_string()],
        categories: vec![Category::new("book", &[])],
        task_keywords: vec!["review".to_string(), "book".to_string()],
        default_category: "misc".to_string(),
    };

    let result = classify_on("review the quarterly numbers", &config, wednesday());
    assert!(!result.is_task);
    assert_eq!(result.formatted, "[review] the quarterly numbers");

    let result = classify_on("book flights", &config, wednesday());
    assert!(result.is_task);
    assert_eq!(result.formatted, "[task:book] flights");
}

#[test]
fn test_empty_config_degrades_gracefully() {
    let config = CaptureConfig::empty("inbox");

    let result = classify_on("fix it", &config, wednesday());
    assert!(!result.is_task);
    assert_eq!(result.formatted, "[note] fix it");

    let result = classify_on("idea: something", &config, wednesday());
    assert_eq!(result.formatted, "[note] idea: something");

    let result = classify_on("task: fix it", &config, wednesday());
    assert!(result.is_task);
    assert_eq!(result.formatted, "[task:inbox] fix it");
}

#[test]
fn test_formatted_output_is_not_reparsed() {
    let config = CaptureConfig::default();
    let first = classify_on("work: fix bug", &config, wednesday());
    assert_eq!(first.formatted, "[task:work] fix bug");

    // Feeding the formatted body back in yields a plain note
    let second = classify_on(&first.formatted, &config, wednesday());
    assert!(!second.is_task);
    assert_eq!(second.formatted, "[note] [task:work] fix bug");
}

#[test]
fn test_classify_is_idempotent() {
    let config = CaptureConfig::default();
    for input in ["call mum tomorrow", "idea: x", "plain text", "work: deploy in 2 weeks"] {
        assert_eq!(classify(input, &config), classify(input, &config));
    }
}

#[test]
fn test_notes_skip_date_extraction() {
    let config = CaptureConfig::default();
    let result = classify_on("log: slept badly yesterday", &config, wednesday());
    assert_eq!(result.formatted, "[log] slept badly yesterday");
}

#[test]
fn test_task_with_only_a_date() {
    let config = CaptureConfig::default();
    let result = classify_on("task: tomorrow", &config, wednesday());
    assert_eq!(
        result.formatted,
        format!("[task:personal] {}", stamp(date(2025, 1, 16)))
    );
}
