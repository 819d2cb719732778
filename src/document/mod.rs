pub mod document;
pub mod normalize;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::{DocumentError, SourceDocument, SourceInfo};
pub use normalize::normalize_text;
