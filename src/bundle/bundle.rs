// Read side of an evidence bundle: no mutation, no update methods.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::bundle::manifest::BundleManifest;
use crate::document::SourceDocument;
use crate::types::evidence::DocumentEvidence;
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum BundleLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Document ID mismatch: manifest says {expected}, file holds {found}")]
    IdMismatch { expected: String, found: String },
    #[error("Document version mismatch for {id}: manifest says {expected}, file holds {found}")]
    VersionMismatch {
        id: String,
        expected: String,
        found: String,
    },
    #[error("Record count mismatch for {id}: manifest says {expected}, file holds {found}")]
    RecordCountMismatch {
        id: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug)]
pub struct EvidenceBundle {
    pub root: PathBuf,
    pub manifest: BundleManifest,
}

impl EvidenceBundle {
    pub fn open(root: &Path) -> Result<Self, BundleLoadError> {
        let f = fs::File::open(root.join("manifest.json"))?;
        let manifest: BundleManifest = serde_json::from_reader(f)?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Load every document's evidence, verifying each file against the
    /// manifest entry that points at it.
    pub fn load_documents(&self) -> Result<Vec<DocumentEvidence>, BundleLoadError> {
        let mut loaded = Vec::with_capacity(self.manifest.documents.len());
        for entry in &self.manifest.documents {
            let f = fs::File::open(self.root.join(&entry.file))?;
            let evidence: DocumentEvidence = serde_json::from_reader(f)?;

            if evidence.id != entry.id {
                warn!(file = %entry.file, "bundle document id mismatch");
                return Err(BundleLoadError::IdMismatch {
                    expected: entry.id.as_str().to_string(),
                    found: evidence.id.as_str().to_string(),
                });
            }
            if evidence.version != entry.version {
                warn!(id = entry.id.as_str(), "bundle document version mismatch");
                return Err(BundleLoadError::VersionMismatch {
                    id: entry.id.as_str().to_string(),
                    expected: entry.version.as_str().to_string(),
                    found: evidence.version.as_str().to_string(),
                });
            }
            if evidence.records.len() != entry.record_count {
                warn!(id = entry.id.as_str(), "bundle record count mismatch");
                return Err(BundleLoadError::RecordCountMismatch {
                    id: entry.id.as_str().to_string(),
                    expected: entry.record_count,
                    found: evidence.records.len(),
                });
            }
            loaded.push(evidence);
        }
        Ok(loaded)
    }

    /// True when the bundle holds evidence for this exact document content.
    pub fn is_current(&self, document: &SourceDocument) -> bool {
        self.manifest
            .entry(&document.id)
            .is_some_and(|entry| entry.version == document.version)
    }

    /// Documents that are new or whose content changed since the bundle was
    /// built, in input order.
    pub fn stale_documents<'a>(&self, documents: &'a [SourceDocument]) -> Vec<&'a DocumentId> {
        documents
            .iter()
            .filter(|d| !self.is_current(d))
            .map(|d| &d.id)
            .collect()
    }
}
