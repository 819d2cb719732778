use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

use crate::bundle::bundle::EvidenceBundle;
use crate::bundle::manifest::{BundleIndex, BundleManifest, ManifestDocumentEntry};
use crate::extraction::ExtractionConfig;
use crate::types::evidence::DocumentEvidence;
use crate::types::identifiers::sha256_tagged;

#[derive(Debug, Error)]
pub enum BundleBuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Filename collision detected for hash fragment: {0}")]
    FilenameCollision(String),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
}

/// BundleBuilder is single-threaded and non-reentrant.
pub struct BundleBuilder {
    config: ExtractionConfig,
}

impl BundleBuilder {
    /// `config` is the configuration the evidence was extracted with; it is
    /// recorded in the manifest and folded into the bundle version.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        evidence: Vec<DocumentEvidence>,
        output_dir: &Path,
    ) -> Result<EvidenceBundle, BundleBuildError> {
        if output_dir.exists() {
            return Err(BundleBuildError::OutputExists(output_dir.to_path_buf()));
        }

        // 1. Sort by ID for determinism; duplicates become adjacent
        let mut sorted = evidence;
        sorted.sort_by(|a, b| a.id.cmp(&b.id));

        for pair in sorted.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(BundleBuildError::DuplicateDocumentId(
                    pair[0].id.as_str().to_string(),
                ));
            }
        }

        // 2. Manifest entries, file names, bundle version
        let mut entries = Vec::with_capacity(sorted.len());
        let mut index_entries = BTreeMap::new();
        let mut seen_stems = BTreeSet::new();

        // bundle_version := sha256(config_json + sorted(id ":" version))
        let mut version_hasher = Sha256::new();
        version_hasher.update(serde_json::to_vec(&self.config)?);

        for doc in &sorted {
            let line = format!("{}:{}", doc.id.as_str(), doc.version.as_str());
            version_hasher.update(line.as_bytes());

            // File stem: first 12 hex chars of the id hash. Two documents may
            // share content, never an id.
            let id_hash = sha256_tagged(doc.id.as_str().as_bytes());
            let stem = id_hash["sha256:".len().."sha256:".len() + 12].to_string();
            if !seen_stems.insert(stem.clone()) {
                return Err(BundleBuildError::FilenameCollision(stem));
            }

            let file = format!("documents/{stem}.json");
            index_entries.insert(doc.id.clone(), file.clone());
            entries.push(ManifestDocumentEntry {
                id: doc.id.clone(),
                version: doc.version.clone(),
                file,
                record_count: doc.records.len(),
            });
        }

        let bundle_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));

        // 3. Manifest; created_at is informational
        let manifest = BundleManifest {
            bundle_version: bundle_version.clone(),
            extraction_config: self.config.clone(),
            created_at: Utc::now(),
            document_count: sorted.len(),
            record_count: sorted.iter().map(|d| d.records.len()).sum(),
            documents: entries,
        };
        let index = BundleIndex::new(index_entries);

        // 4. Write everything into a temp dir named after the bundle version
        let temp_dir = output_dir.with_extension(format!("tmp.{}", &bundle_version[7..19]));
        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(temp_dir.join("documents"))?;

        for (doc, entry) in sorted.iter().zip(&manifest.documents) {
            let f = fs::File::create(temp_dir.join(&entry.file))?;
            serde_json::to_writer(&f, doc)?;
            f.sync_all()?;
        }

        let f_idx = fs::File::create(temp_dir.join("index.json"))?;
        serde_json::to_writer_pretty(&f_idx, &index)?;
        f_idx.sync_all()?;

        let f_man = fs::File::create(temp_dir.join("manifest.json"))?;
        serde_json::to_writer_pretty(&f_man, &manifest)?;
        f_man.sync_all()?;

        // 5. Atomic rename
        fs::rename(&temp_dir, output_dir)?;

        info!(
            documents = manifest.document_count,
            records = manifest.record_count,
            bundle_version = %manifest.bundle_version,
            "evidence bundle written"
        );

        Ok(EvidenceBundle {
            root: output_dir.to_path_buf(),
            manifest,
        })
    }
}
