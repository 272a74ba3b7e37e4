//! Due-date extraction
//!
//! Dates are recognized by [`DATE_RULES`], a table of `(pattern, resolver)`
//! pairs evaluated in order. Adding a phrasing means adding a row.

use super::entry::{DateExtraction, local_date_today};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Full day names and the abbreviations accepted for them
const DAY_NAMES: &str =
    "sunday|sun|monday|mon|tuesday|tue|tues|wednesday|wed|thursday|thu|thur|thurs|friday|fri|saturday|sat";

struct DateRule {
    name: &'static str,
    /// Matches the phrase plus the whitespace around it
    pattern: Regex,
    /// Returns `None` when the date cannot be represented
    resolve: fn(&Captures, NaiveDate) -> Option<NaiveDate>,
}

impl DateRule {
    fn new(
        name: &'static str,
        phrase: &str,
        resolve: fn(&Captures, NaiveDate) -> Option<NaiveDate>,
    ) -> Self {
        let pattern = Regex::new(&format!(r"(?i)\s*\b{}\b\s*", phrase)).expect("valid date regex");
        Self {
            name,
            pattern,
            resolve,
        }
    }
}

static DATE_RULES: LazyLock<Vec<DateRule>> = LazyLock::new(|| {
    vec![
        DateRule::new("today", "today", |_, today| Some(today)),
        DateRule::new("tomorrow", "tomorrow", |_, today| {
            today.checked_add_days(Days::new(1))
        }),
        DateRule::new("yesterday", "yesterday", |_, today| {
            today.checked_sub_days(Days::new(1))
        }),
        DateRule::new(
            "in_n_units",
            r"in\s+(\d+)\s+(days?|weeks?|months?)",
            resolve_in_n_units,
        ),
        DateRule::new(
            "next_weekday",
            &format!(r"next\s+({})", DAY_NAMES),
            resolve_weekday,
        ),
        // "this" and "next" resolve to the same day
        DateRule::new(
            "this_weekday",
            &format!(r"this\s+({})", DAY_NAMES),
            resolve_weekday,
        ),
        DateRule::new(
            "weekday",
            &format!(r"(?:on\s+)?({})", DAY_NAMES),
            resolve_weekday,
        ),
        DateRule::new("next_week", r"next\s+week", |_, today| {
            let monday = today.checked_sub_days(Days::new(
                today.weekday().num_days_from_monday() as u64,
            ))?;
            monday.checked_add_days(Days::new(7))
        }),
    ]
});

/// Scan `text` for a date phrase relative to the local calendar date
///
/// # Arguments
/// * `text` - Provisional task content
///
/// # Returns
/// The resolved date (if any) and the text with the phrase removed
pub fn extract_date(text: &str) -> DateExtraction {
    extract_date_on(text, local_date_today())
}

/// Scan `text` for a date phrase relative to `today`
///
/// Only the first rule that matches and resolves is applied. The matched
/// phrase and its surrounding whitespace collapse to a single space and the
/// result is trimmed. Without a match the text is returned untouched.
pub fn extract_date_on(text: &str, today: NaiveDate) -> DateExtraction {
    for rule in DATE_RULES.iter() {
        if let Some(caps) = rule.pattern.captures(text)
            && let Some(due) = (rule.resolve)(&caps, today)
        {
            let phrase = caps.get(0).map_or(0..0, |m| m.range());
            let cleaned_input = format!("{} {}", &text[..phrase.start], &text[phrase.end..])
                .trim()
                .to_string();
            tracing::debug!(rule = rule.name, %due, "extracted date");
            return DateExtraction {
                due: Some(due),
                cleaned_input,
            };
        }
    }

    DateExtraction {
        due: None,
        cleaned_input: text.to_string(),
    }
}

fn resolve_in_n_units(caps: &Captures, today: NaiveDate) -> Option<NaiveDate> {
    let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().to_lowercase();

    if unit.starts_with("day") {
        today.checked_add_days(Days::new(amount as u64))
    } else if unit.starts_with("week") {
        today.checked_add_days(Days::new(amount as u64 * 7))
    } else {
        today.checked_add_months(Months::new(amount))
    }
}

fn resolve_weekday(caps: &Captures, today: NaiveDate) -> Option<NaiveDate> {
    let target = parse_weekday(caps.get(1)?.as_str())?;
    next_occurrence(today, target)
}

/// Next `target` strictly after `from`; a full week ahead if `from` is one
fn next_occurrence(from: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let ahead = (7 + target.num_days_from_monday() - from.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    from.checked_add_days(Days::new(ahead as u64))
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "sunday" | "sun" => Some(Weekday::Sun),
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        _ => None,
    }
}
