use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::calendar::parse_date;

static FOUR_PART_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+/\d+/\d+/\d+").expect("phone pattern compiles"));
static HYPHEN_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+-\d+-\d+").expect("phone pattern compiles"));
static LONG_DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{10,}").expect("phone pattern compiles"));
static MONTH_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b")
        .expect("month pattern compiles")
});
static FOUR_DIGIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4}\b").expect("year pattern compiles"));

/// Heuristic for date-like matches that are really phone or extension
/// numbers, e.g. `8200/1/2/3`, `91-72-820` or `2024-123-4567`.
///
/// A hyphenated triple is only phone-like when it is not a real calendar
/// date, so `2025-04-12` and `12-04-2025` pass.
pub fn is_likely_phone_number(text: &str) -> bool {
    if FOUR_PART_SLASHES.is_match(text) || LONG_DIGIT_RUN.is_match(text) {
        return true;
    }
    if HYPHEN_TRIPLE.is_match(text) && parse_date(text, true).is_none() {
        return true;
    }

    let looks_like_date = MONTH_WORD.is_match(text) || FOUR_DIGIT_YEAR.is_match(text);
    !looks_like_date
}
