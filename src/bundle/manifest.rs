use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::extraction::ExtractionConfig;
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestDocumentEntry {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub file: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BundleManifest {
    pub bundle_version: String,
    pub extraction_config: ExtractionConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub document_count: usize,
    pub record_count: usize,
    pub documents: Vec<ManifestDocumentEntry>,
}

impl BundleManifest {
    pub fn entry(&self, id: &DocumentId) -> Option<&ManifestDocumentEntry> {
        self.documents
            .binary_search_by(|entry| entry.id.cmp(id))
            .ok()
            .map(|i| &self.documents[i])
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BundleIndex {
    entries: BTreeMap<DocumentId, String>,
}

impl BundleIndex {
    pub fn new(entries: BTreeMap<DocumentId, String>) -> Self {
        Self { entries }
    }

    pub fn file_for(&self, id: &DocumentId) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }
}
