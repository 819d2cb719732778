//! Calendar reading of raw date strings.
//!
//! Understands the forms the default pattern matches: ISO `Y-M-D`, numeric
//! `D-M-Y` (or `M-D-Y`), and textual months with optional ordinals. Two-digit
//! years are read as 20xx.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+|\d+").expect("date part pattern compiles"));

const MONTH_NAMES: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Parse `raw` into a calendar date. `None` when it is not a real date
/// (for example `31/02/2025`) or not a recognised shape.
pub fn parse_date(raw: &str, prefer_dayfirst: bool) -> Option<NaiveDate> {
    let mut numbers: Vec<&str> = Vec::new();
    let mut month_name: Option<u32> = None;

    for part in PARTS.find_iter(raw).map(|m| m.as_str()) {
        if part.as_bytes()[0].is_ascii_digit() {
            numbers.push(part);
        } else if let Some(month) = month_from_name(part) {
            if month_name.replace(month).is_some() {
                return None;
            }
        } else if !is_ordinal_suffix(part) {
            return None;
        }
    }

    match (month_name, numbers.as_slice()) {
        (Some(month), [a, b]) => {
            // "12 Apr 2025", "April 12, 2025", rarely "2025 Apr 12"
            let (day, year) = if a.len() == 4 { (b, a) } else { (a, b) };
            ymd(year, month, day.parse().ok()?)
        }
        (None, [y, m, d]) if y.len() == 4 => ymd(y, m.parse().ok()?, d.parse().ok()?),
        (None, [a, b, y]) => {
            let a: u32 = a.parse().ok()?;
            let b: u32 = b.parse().ok()?;
            let (first, second) = if prefer_dayfirst { ((b, a), (a, b)) } else { ((a, b), (b, a)) };
            ymd(y, first.0, first.1).or_else(|| ymd(y, second.0, second.1))
        }
        _ => None,
    }
}

fn ymd(year: &str, month: u32, day: u32) -> Option<NaiveDate> {
    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_from_name(word: &str) -> Option<u32> {
    let word = word.to_ascii_lowercase();
    if word.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&word))
        .map(|i| i as u32 + 1)
}

fn is_ordinal_suffix(word: &str) -> bool {
    matches!(word.to_ascii_lowercase().as_str(), "st" | "nd" | "rd" | "th")
}
