//! Parallel extraction over independent documents.
//!
//! The engine holds no cross-document state, so documents are fanned out to
//! rayon workers with no coordination. Output order equals input order.

use rayon::prelude::*;
use tracing::info;

use crate::document::SourceDocument;
use crate::extraction::dedup::SimilarityMeasure;
use crate::extraction::matcher::DatePattern;
use crate::extraction::ContextExtractor;
use crate::types::evidence::DocumentEvidence;

impl<M> ContextExtractor<M>
where
    M: SimilarityMeasure + Sync,
{
    pub fn extract_batch(
        &self,
        documents: &[SourceDocument],
        pattern: &DatePattern,
    ) -> Vec<DocumentEvidence> {
        info!(documents = documents.len(), "extracting evidence batch");

        let evidence: Vec<DocumentEvidence> = documents
            .par_iter()
            .map(|document| self.extract_document(document, pattern))
            .collect();

        let records: usize = evidence.iter().map(|e| e.records.len()).sum();
        info!(documents = evidence.len(), records, "evidence batch complete");
        evidence
    }
}
