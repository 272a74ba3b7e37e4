//! Input classification
//!
//! A capture is classified by walking [`RULES`] in order; the first rule that
//! returns a result wins. Prefix checks only look at the very start of the
//! input and ignore case.

use super::config::CaptureConfig;
use super::date_extractor::extract_date_on;
use super::entry::{ClassificationResult, local_date_today};
use chrono::NaiveDate;

/// Literal prefix that forces a task with keyword-inferred category
const TASK_TAG: &str = "task";

/// Tag used when nothing else matches
const NOTE_TAG: &str = "note";

type Rule = fn(&str, &CaptureConfig, NaiveDate) -> Option<ClassificationResult>;

/// Classification rules in priority order
const RULES: &[(&str, Rule)] = &[
    ("entry_type_prefix", entry_type_prefix),
    ("category_prefix", category_prefix),
    ("task_prefix", task_prefix),
    ("task_keyword", task_keyword),
    ("default_note", default_note),
];

/// Classify one line of input relative to the local calendar date
///
/// # Arguments
/// * `input` - Non-empty, trimmed capture text
/// * `config` - Classification configuration (never mutated)
///
/// # Returns
/// The formatted entry body and whether it is a task
pub fn classify(input: &str, config: &CaptureConfig) -> ClassificationResult {
    classify_on(input, config, local_date_today())
}

/// Classify one line of input with an explicit "today"
pub fn classify_on(input: &str, config: &CaptureConfig, today: NaiveDate) -> ClassificationResult {
    RULES
        .iter()
        .find_map(|(name, rule)| {
            let result = rule(input, config, today)?;
            tracing::debug!(rule = *name, is_task = result.is_task, "classified input");
            Some(result)
        })
        .unwrap_or_else(|| ClassificationResult::note(NOTE_TAG, input))
}

/// `idea: ...`, `log ...` and every other configured type except `task`
fn entry_type_prefix(
    input: &str,
    config: &CaptureConfig,
    _today: NaiveDate,
) -> Option<ClassificationResult> {
    config
        .entry_types
        .iter()
        .filter(|tag| tag.to_lowercase() != TASK_TAG)
        .find_map(|tag| strip_lead(input, tag).map(|rest| ClassificationResult::note(tag, rest)))
}

/// `work: ...` forces both the category and task-ness
fn category_prefix(
    input: &str,
    config: &CaptureConfig,
    today: NaiveDate,
) -> Option<ClassificationResult> {
    config.categories.iter().find_map(|category| {
        strip_lead(input, &category.name)
            .map(|rest| format_task_with_category(rest, &category.name, today))
    })
}

fn task_prefix(
    input: &str,
    config: &CaptureConfig,
    today: NaiveDate,
) -> Option<ClassificationResult> {
    strip_lead(input, TASK_TAG).map(|rest| format_task(rest, config, today))
}

/// A leading task keyword keeps the whole input, keyword included
fn task_keyword(
    input: &str,
    config: &CaptureConfig,
    today: NaiveDate,
) -> Option<ClassificationResult> {
    config
        .task_keywords
        .iter()
        .any(|keyword| strip_lead(input, keyword).is_some())
        .then(|| format_task(input, config, today))
}

fn default_note(
    input: &str,
    _config: &CaptureConfig,
    _today: NaiveDate,
) -> Option<ClassificationResult> {
    Some(ClassificationResult::note(NOTE_TAG, input))
}

/// Build a task entry with a category inferred from keywords
fn format_task(text: &str, config: &CaptureConfig, today: NaiveDate) -> ClassificationResult {
    let category = config.category_for(text);
    format_task_with_category(text, category, today)
}

fn format_task_with_category(text: &str, category: &str, today: NaiveDate) -> ClassificationResult {
    let extraction = extract_date_on(text, today);
    ClassificationResult::task(category, &extraction)
}

/// Strip `word` followed by `:` or a space from the start of `input`
///
/// Returns the remainder with the separator and leading whitespace removed,
/// or `None` when `input` does not start with the word and a separator.
fn strip_lead<'a>(input: &'a str, word: &str) -> Option<&'a str> {
    let rest = strip_prefix_ignore_case(input, word)?;
    if let Some(after_colon) = rest.strip_prefix(':') {
        Some(after_colon.trim_start())
    } else if rest.starts_with(' ') {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(&text[chars.offset()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        // A Wednesday
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_strip_lead_colon_and_space() {
        assert_eq!(strip_lead("idea: better cache", "idea"), Some("better cache"));
        assert_eq!(strip_lead("Idea better cache", "idea"), Some("better cache"));
        assert_eq!(strip_lead("idea:better", "idea"), Some("better"));
        assert_eq!(strip_lead("ideas are cheap", "idea"), None);
        assert_eq!(strip_lead("idea", "idea"), None);
    }

    #[test]
    fn test_strip_prefix_ignore_case_non_ascii() {
        assert_eq!(strip_prefix_ignore_case("Élan vital", "élan"), Some(" vital"));
        assert_eq!(strip_prefix_ignore_case("ab", "abc"), None);
    }

    #[test]
    fn test_rules_are_ordered() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "entry_type_prefix",
                "category_prefix",
                "task_prefix",
                "task_keyword",
                "default_note"
            ]
        );
    }

    #[test]
    fn test_each_rule_in_isolation() {
        let config = CaptureConfig::default();
        assert!(entry_type_prefix("log: ran 5k", &config, day()).is_some());
        assert!(entry_type_prefix("task: ran 5k", &config, day()).is_none());
        assert!(category_prefix("work: ran 5k", &config, day()).is_some());
        assert!(task_prefix("task ran 5k", &config, day()).is_some());
        assert!(task_keyword("fix the sink", &config, day()).is_some());
        assert!(task_keyword("fixed the sink", &config, day()).is_none());
        assert!(default_note("anything", &config, day()).is_some());
    }

    #[test]
    fn test_task_entry_type_is_not_a_note_prefix() {
        let config = CaptureConfig::default();
        let result = classify_on("task: water plants", &config, day());
        assert!(result.is_task);
        assert_eq!(result.formatted, "[task:personal] water plants");
    }
}
