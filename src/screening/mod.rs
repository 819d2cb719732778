//! Downstream relevance heuristics.
//!
//! These run after extraction, at the caller's discretion. The extraction
//! engine never consults them: every record it emits is complete whether or
//! not it would survive screening.

pub mod phone;
pub mod vocabulary;

use serde::Serialize;

use crate::types::evidence::EvidenceRecord;
pub use phone::is_likely_phone_number;
pub use vocabulary::{AdmissionVocabulary, DEFAULT_ADMISSION_TERMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningVerdict {
    Accepted,
    PhoneNumberLike,
    NoAdmissionVocabulary,
}

#[derive(Debug, Clone, Default)]
pub struct Screener {
    vocabulary: AdmissionVocabulary,
}

impl Screener {
    pub fn new(vocabulary: AdmissionVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn verdict(&self, record: &EvidenceRecord) -> ScreeningVerdict {
        if is_likely_phone_number(&record.primary_date) {
            ScreeningVerdict::PhoneNumberLike
        } else if !self.vocabulary.matches(&record.context) {
            ScreeningVerdict::NoAdmissionVocabulary
        } else {
            ScreeningVerdict::Accepted
        }
    }

    /// Keep accepted records, in order.
    pub fn screen(&self, records: Vec<EvidenceRecord>) -> Vec<EvidenceRecord> {
        records
            .into_iter()
            .filter(|record| self.verdict(record) == ScreeningVerdict::Accepted)
            .collect()
    }
}
