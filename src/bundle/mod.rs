pub mod builder;
pub mod bundle;
pub mod manifest;

pub use builder::{BundleBuildError, BundleBuilder};
pub use bundle::{BundleLoadError, EvidenceBundle};
pub use manifest::{BundleIndex, BundleManifest, ManifestDocumentEntry};
