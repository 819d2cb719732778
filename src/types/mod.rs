pub mod evidence;
pub mod identifiers;

pub use evidence::{
    Cluster, ContextWindow, DateMatch, DocumentEvidence, EvidenceRecord, ExtractionError,
};
pub use identifiers::{ContextFingerprint, DocumentId, DocumentVersion};
