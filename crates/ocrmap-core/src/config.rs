//! Alignment configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::confidence::ConfidenceThresholds;
use crate::similarity::SimilarityMetric;

/// Document score below which a match is reported as weak.
pub const DEFAULT_DOC_MATCH_THRESHOLD: f64 = 0.35;
/// Relative window size spread around the span length.
pub const DEFAULT_WINDOW_EXPANSION: f64 = 0.3;
/// Stride is `span length / divisor`.
pub const DEFAULT_STRIDE_DIVISOR: usize = 4;
/// Window score that ends the approximate search early.
pub const DEFAULT_EARLY_EXIT_SCORE: f64 = 0.995;
/// Number of normalized document chars kept as the record preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be between 0 and 1, got {value}")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("window_expansion must be in [0, 1), got {0}")]
    WindowExpansion(f64),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("confidence thresholds must satisfy low <= medium <= high")]
    UnorderedConfidence,
}

/// Tunables for the alignment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    /// Weak-document warning threshold.
    pub doc_match_threshold: f64,
    /// Window sizes span `[L * (1 - e), L * (1 + e)]`.
    pub window_expansion: f64,
    /// Window stride is `max(1, L / stride_divisor)`.
    pub stride_divisor: usize,
    /// Stop searching once a window scores above this.
    pub early_exit_score: f64,
    /// Preview length in chars.
    pub preview_chars: usize,
    pub metric: SimilarityMetric,
    /// Align documents on the rayon pool.
    pub parallel: bool,
    /// Buckets used for reporting span scores.
    pub confidence: ConfidenceThresholds,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            doc_match_threshold: DEFAULT_DOC_MATCH_THRESHOLD,
            window_expansion: DEFAULT_WINDOW_EXPANSION,
            stride_divisor: DEFAULT_STRIDE_DIVISOR,
            early_exit_score: DEFAULT_EARLY_EXIT_SCORE,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            metric: SimilarityMetric::default(),
            parallel: true,
            confidence: ConfidenceThresholds::default(),
        }
    }
}

impl AlignConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_doc_match_threshold(mut self, threshold: f64) -> Self {
        self.doc_match_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_window_expansion(mut self, expansion: f64) -> Self {
        self.window_expansion = expansion;
        self
    }

    #[must_use]
    pub fn with_stride_divisor(mut self, divisor: usize) -> Self {
        self.stride_divisor = divisor;
        self
    }

    #[must_use]
    pub fn with_early_exit_score(mut self, score: f64) -> Self {
        self.early_exit_score = score;
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    #[must_use]
    pub fn with_confidence(mut self, confidence: ConfidenceThresholds) -> Self {
        self.confidence = confidence;
        self
    }

    /// Checks that every value is usable by the engine.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("doc_match_threshold", self.doc_match_threshold),
            ("early_exit_score", self.early_exit_score),
            ("confidence.high", self.confidence.high),
            ("confidence.medium", self.confidence.medium),
            ("confidence.low", self.confidence.low),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }
        if !(0.0..1.0).contains(&self.window_expansion) {
            return Err(ConfigError::WindowExpansion(self.window_expansion));
        }
        if self.stride_divisor == 0 {
            return Err(ConfigError::Zero {
                field: "stride_divisor",
            });
        }
        if self.preview_chars == 0 {
            return Err(ConfigError::Zero {
                field: "preview_chars",
            });
        }
        if !self.confidence.is_ordered() {
            return Err(ConfigError::UnorderedConfidence);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AlignConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.doc_match_threshold, 0.35);
        assert_eq!(config.window_expansion, 0.3);
        assert_eq!(config.stride_divisor, 4);
        assert_eq!(config.early_exit_score, 0.995);
        assert_eq!(config.preview_chars, 200);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = AlignConfig::default().with_doc_match_threshold(1.5);
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfUnitRange {
                field: "doc_match_threshold",
                value: 1.5
            })
        );
    }

    #[test]
    fn rejects_nan() {
        let config = AlignConfig::default().with_early_exit_score(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfUnitRange {
                field: "early_exit_score",
                ..
            })
        ));
    }

    #[test]
    fn rejects_full_window_expansion() {
        let config = AlignConfig::default().with_window_expansion(1.0);
        assert_eq!(config.validate(), Err(ConfigError::WindowExpansion(1.0)));
    }

    #[test]
    fn rejects_zero_stride_divisor() {
        let config = AlignConfig::default().with_stride_divisor(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Zero {
                field: "stride_divisor"
            })
        );
    }

    #[test]
    fn rejects_unordered_confidence() {
        let config = AlignConfig::default().with_confidence(ConfidenceThresholds {
            high: 0.5,
            medium: 0.8,
            low: 0.2,
        });
        assert_eq!(config.validate(), Err(ConfigError::UnorderedConfidence));
    }
}
