//! Free-text helpers for numbers, durations and keyword scoring.
//!
//! Page text on recipe sites is loosely formatted ("Prep:15 mins", "4.5 out of 5",
//! "kcal 520"), so everything here scans for the first plausible token instead of
//! parsing whole strings.

use regex::Regex;
use std::sync::LazyLock;

/// Decimal alternative comes first so "12.5" is captured whole rather than as "12".
/// ASCII digits only, matching what `str::parse` accepts.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+|[0-9]+").expect("number pattern should be valid"));

static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*hrs?").expect("hours pattern should be valid"));

static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*mins?").expect("minutes pattern should be valid"));

/// Returns the leftmost integer or decimal literal in `text`.
pub fn find_first_number(text: &str) -> Option<f64> {
    NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Converts an "1hr 30mins" style duration into total minutes.
///
/// Hours and minutes are searched independently and only the first occurrence of
/// each is used. A missing unit counts as zero, so `""` yields `0`.
pub fn time_string_to_minutes(text: &str) -> u32 {
    let hours = first_capture(&HOURS, text).unwrap_or(0);
    let minutes = first_capture(&MINUTES, text).unwrap_or(0);

    hours.saturating_mul(60).saturating_add(minutes)
}

fn first_capture(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// True when the text holds both an opening and a closing round bracket.
pub fn contains_brackets(text: &str) -> bool {
    text.contains('(') && text.contains(')')
}

pub fn contains_number(text: &str) -> bool {
    find_first_number(text).is_some()
}

/// Counts how many of `keywords` occur in `text` (case-sensitive, each at most once).
pub fn count_keywords(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|keyword| text.contains(*keyword)).count() as u32
}
