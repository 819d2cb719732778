use regex::{escape, Regex};

use crate::types::evidence::ExtractionError;

pub const DEFAULT_ADMISSION_TERMS: [&str; 6] = [
    "admission",
    "apply",
    "application",
    "deadline",
    "enroll",
    "registration",
];

/// Admission vocabulary matched as whole words, case-insensitively, with an
/// optional plural `s`.
#[derive(Debug, Clone)]
pub struct AdmissionVocabulary {
    // None for an empty term list, which matches nothing
    pattern: Option<Regex>,
}

impl AdmissionVocabulary {
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Result<Self, ExtractionError> {
        let alternation = terms
            .iter()
            .map(|t| escape(t.as_ref().trim()))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})s?\b"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn matches(&self, context: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(context))
    }

    /// Distinct vocabulary hits in `context`, lowercased, in first-seen order.
    pub fn hits(&self, context: &str) -> Vec<String> {
        let mut hits: Vec<String> = Vec::new();
        let Some(pattern) = &self.pattern else {
            return hits;
        };
        for m in pattern.find_iter(context) {
            let word = m.as_str().to_lowercase();
            if !hits.contains(&word) {
                hits.push(word);
            }
        }
        hits
    }
}

impl Default for AdmissionVocabulary {
    fn default() -> Self {
        Self::new(&DEFAULT_ADMISSION_TERMS).expect("default admission terms compile")
    }
}
