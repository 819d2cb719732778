use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identity of a source document, usually its URL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    /// Identity derived from a page URL: surrounding whitespace and trailing
    /// slashes do not distinguish two pages.
    pub fn from_url(url: &str) -> Self {
        DocumentId(url.trim().trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content hash version of a document's normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        DocumentVersion(sha256_tagged(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content hash of an evidence record's context text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextFingerprint(String);

impl ContextFingerprint {
    pub fn from_context(context: &str) -> Self {
        ContextFingerprint(sha256_tagged(context.as_bytes()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn sha256_tagged(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
