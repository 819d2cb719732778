//! Deterministic date-context extraction for admission notices.
//!
//! `evidence-core` scans normalized plain text for date-like tokens, groups
//! nearby mentions into events, cuts a bounded token window around each event
//! and collapses near-duplicate windows into self-contained evidence records.
//! Identical inputs always produce identical outputs, byte-for-byte.
//!
//! ```
//! use evidence_core::extraction::{ContextExtractor, DatePattern, ExtractionConfig};
//!
//! let extractor = ContextExtractor::new(ExtractionConfig::default()).unwrap();
//! let pattern = DatePattern::admission_default();
//! let records = extractor.extract("Apply by 12 Apr 2025 for admission.", &pattern);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].primary_date, "12 Apr 2025");
//! ```

pub mod bundle;
pub mod document;
pub mod extraction;
pub mod screening;
pub mod types;
