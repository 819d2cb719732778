pub mod assemble;
pub mod batch;
pub mod calendar;
pub mod clustering;
pub mod config;
pub mod dedup;
pub mod matcher;
pub mod offsets;
pub mod window;

use tracing::debug;

use crate::document::SourceDocument;
use crate::types::evidence::{ContextWindow, DocumentEvidence, EvidenceRecord, ExtractionError};
pub use assemble::assemble_records;
pub use calendar::parse_date;
pub use clustering::cluster_matches;
pub use config::ExtractionConfig;
pub use dedup::{deduplicate, merge_pass, EvidenceGroup, LcsRatio, SimilarityMeasure};
pub use matcher::DatePattern;
pub use offsets::{OffsetMapping, TokenMap};
pub use window::build_window;

/// Pure-function form: compile `pattern`, validate `config`, extract.
///
/// Configuration problems are reported before any scanning happens.
pub fn extract_evidence(
	text: &str,
	pattern: &str,
	config: &ExtractionConfig,
) -> Result<Vec<EvidenceRecord>, ExtractionError> {
	let pattern = DatePattern::new(pattern)?;
	let extractor = ContextExtractor::new(config.clone())?;
	Ok(extractor.extract(text, &pattern))
}

/// Stateless extraction engine. Holds only its validated configuration and
/// the similarity measure, so one instance can serve any number of documents
/// concurrently.
#[derive(Debug, Clone)]
pub struct ContextExtractor<M = LcsRatio> {
	config: ExtractionConfig,
	measure: M,
}

impl ContextExtractor<LcsRatio> {
	pub fn new(config: ExtractionConfig) -> Result<Self, ExtractionError> {
		Self::with_measure(config, LcsRatio)
	}
}

impl<M> ContextExtractor<M>
where
	M: SimilarityMeasure,
{
	pub fn with_measure(config: ExtractionConfig, measure: M) -> Result<Self, ExtractionError> {
		config.validate()?;
		Ok(Self { config, measure })
	}

	pub fn config(&self) -> &ExtractionConfig {
		&self.config
	}

	/// Matcher -> clusterer -> window builder -> deduplicator -> assembler.
	///
	/// Never fails: empty text or text without dates yields an empty list.
	#[tracing::instrument(skip_all, fields(text_len = text.len()))]
	pub fn extract(&self, text: &str, pattern: &DatePattern) -> Vec<EvidenceRecord> {
		// 1. Matching Phase
		let matches = pattern.find_matches(text);
		if matches.is_empty() {
			debug!("no date matches");
			return Vec::new();
		}
		let match_count = matches.len();

		// 2. Clustering Phase
		let clusters = cluster_matches(matches, self.config.max_cluster_gap_chars);

		debug_assert!(
			clusters.windows(2).all(|w| w[0].last().end <= w[1].first().start),
			"clusters must be disjoint and in source order"
		);

		// 3. Windowing Phase
		let map = TokenMap::build(text, self.config.offset_mapping);
		let pairs: Vec<_> = clusters
			.into_iter()
			.map(|cluster| {
				let window: ContextWindow = build_window(
					&cluster,
					&map,
					self.config.before_tokens,
					self.config.after_tokens,
				);
				(cluster, window)
			})
			.collect();
		let cluster_count = pairs.len();

		// 4. Dedup Phase
		let groups = deduplicate(pairs, &self.measure, self.config.similarity_threshold);

		// 5. Assembly Phase
		let records = assemble_records(groups, self.config.prefer_dayfirst);

		debug!(
			matches = match_count,
			clusters = cluster_count,
			tokens = map.len(),
			records = records.len(),
			"extracted evidence"
		);
		records
	}

	pub fn extract_document(&self, document: &SourceDocument, pattern: &DatePattern) -> DocumentEvidence {
		DocumentEvidence {
			id: document.id.clone(),
			version: document.version.clone(),
			site: document.source.site.clone(),
			records: self.extract(&document.text, pattern),
		}
	}
}
