use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::normalize::normalize_text;
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Where a document came from. Informational only; never hashed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceInfo {
    pub url: Option<String>,
    pub site: Option<String>,
}

/// A normalized plain-text document ready for extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub source: SourceInfo,
    pub text: String,
}

impl SourceDocument {
    /// Ingest raw bytes into a SourceDocument.
    ///
    /// The bytes must already be plain text (markup stripped). Lines are
    /// normalized, then the version is computed on the normalized text so that
    /// cosmetic whitespace changes upstream do not look like content changes.
    pub fn ingest(
        id: DocumentId,
        raw_content: Vec<u8>,
        source: SourceInfo,
    ) -> Result<Self, DocumentError> {
        let raw = String::from_utf8(raw_content)?;
        let text = normalize_text(&raw);
        let version = DocumentVersion::from_content(text.as_bytes());

        Ok(SourceDocument {
            id,
            version,
            source,
            text,
        })
    }
}
