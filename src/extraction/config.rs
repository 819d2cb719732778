use serde::{Deserialize, Serialize};

use crate::extraction::offsets::OffsetMapping;
use crate::types::evidence::ExtractionError;

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Tokens kept before the first match of a cluster.
    pub before_tokens: usize,
    /// Tokens kept after the last match of a cluster.
    pub after_tokens: usize,
    /// A match starting this many bytes (or more) after the previous match
    /// ends opens a new cluster.
    pub max_cluster_gap_chars: usize,
    /// Windows more similar than this are merged into one record.
    pub similarity_threshold: f64,
    pub offset_mapping: OffsetMapping,
    /// Read ambiguous numeric dates such as `01/02/2025` as day-first.
    pub prefer_dayfirst: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            before_tokens: 50,
            after_tokens: 50,
            max_cluster_gap_chars: 500,
            similarity_threshold: 0.7,
            offset_mapping: OffsetMapping::Approximate,
            prefer_dayfirst: true,
        }
    }
}

impl ExtractionConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults;
    /// negative counts and unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, ExtractionError> {
        let config: ExtractionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ExtractionError> {
        let t = self.similarity_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(ExtractionError::InvalidThreshold(t));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ExtractionConfig::default();
        assert_eq!(cfg.before_tokens, 50);
        assert_eq!(cfg.after_tokens, 50);
        assert_eq!(cfg.max_cluster_gap_chars, 500);
        assert!((cfg.similarity_threshold - 0.7).abs() < 1e-9);
        assert_eq!(cfg.offset_mapping, OffsetMapping::Approximate);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        for t in [0.0, 1.0] {
            let cfg = ExtractionConfig {
                similarity_threshold: t,
                ..Default::default()
            };
            assert!(cfg.validate().is_ok());
        }
        for t in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            let cfg = ExtractionConfig {
                similarity_threshold: t,
                ..Default::default()
            };
            assert!(matches!(cfg.validate(), Err(ExtractionError::InvalidThreshold(_))));
        }
    }
}
