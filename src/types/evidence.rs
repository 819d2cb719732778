use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ContextFingerprint, DocumentId, DocumentVersion};

/// A single date-like occurrence in the normalized text.
/// `start`/`end` are byte offsets into that text, `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// One logical event: consecutive matches lying within the gap threshold.
///
/// Always non-empty; matches are kept in `start` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    matches: Vec<DateMatch>,
}

impl Cluster {
    pub fn new(first: DateMatch) -> Self {
        Self {
            matches: vec![first],
        }
    }

    pub(crate) fn push(&mut self, next: DateMatch) {
        debug_assert!(next.start >= self.last().start, "cluster matches must stay sorted");
        self.matches.push(next);
    }

    pub fn first(&self) -> &DateMatch {
        &self.matches[0]
    }

    pub fn last(&self) -> &DateMatch {
        &self.matches[self.matches.len() - 1]
    }

    pub fn matches(&self) -> &[DateMatch] {
        &self.matches
    }
}

/// Token span `[start_token, end_token)` around a cluster, rendered with
/// single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub text: String,
    pub start_token: usize,
    pub end_token: usize,
}

/// The final output unit: a date, its related dates, and supporting context.
/// Self-contained; nothing downstream needs the source text to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// Raw text of the first match of the earliest contributing cluster.
    pub primary_date: String,
    pub related_dates: BTreeSet<String>,
    pub context: String,
    pub start_token: usize,
    pub end_token: usize,
    /// Calendar reading of `primary_date`, when it is a real date.
    pub normalized_date: Option<NaiveDate>,
    /// Number of clusters merged into this record.
    pub cluster_count: usize,
    pub fingerprint: ContextFingerprint,
}

/// Evidence extracted from one source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEvidence {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub site: Option<String>,
    pub records: Vec<EvidenceRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Invalid date pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Similarity threshold {0} outside [0.0, 1.0]")]
    InvalidThreshold(f64),

    #[error("Invalid extraction config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
