use std::sync::LazyLock;

use regex::Regex;

use crate::types::evidence::{DateMatch, ExtractionError};

const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?\
|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

const ORDINAL: &str = "(?:st|nd|rd|th)?";

static ADMISSION_DATES: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)\b(?:\d{{4}}[-./]\d{{1,2}}[-./]\d{{1,2}}|\d{{1,2}}[-./]\d{{1,2}}[-./](?:\d{{4}}|\d{{2}})|\d{{1,2}}{ORDINAL}[- ]?(?:{MONTHS})\.?,?[- ]?\d{{2,4}}|(?:{MONTHS})\.? +\d{{1,2}}{ORDINAL},? +\d{{4}})\b"
    );
    Regex::new(&pattern).expect("built-in date pattern compiles")
});

/// A compiled date-matching pattern supplied by the caller.
#[derive(Debug, Clone)]
pub struct DatePattern {
    regex: Regex,
}

impl DatePattern {
    /// Compile a caller-supplied pattern. Fails fast on malformed input.
    pub fn new(pattern: &str) -> Result<Self, ExtractionError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The admission-notice date vocabulary:
    /// ISO `Y-M-D`, numeric `D-M-Y` with `.`, `/` or `-`,
    /// `D Month Y` and `Month D, Y` with ordinals and abbreviated months.
    /// Month names match case-insensitively. Textual parts are separated by
    /// spaces or hyphens only, so a match never spans a line break.
    pub fn admission_default() -> Self {
        Self {
            regex: ADMISSION_DATES.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping matches, left to right. Empty matches are skipped.
    pub fn find_matches(&self, text: &str) -> Vec<DateMatch> {
        self.regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| DateMatch {
                text: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }
}

impl From<Regex> for DatePattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}
