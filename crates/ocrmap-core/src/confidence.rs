//! Confidence buckets for span alignment scores.

use serde::{Deserialize, Serialize};

/// Confidence level categories for alignment quality assessment.
///
/// - `High`: near-exact alignments that can be trusted without review
/// - `Medium`: good alignments that should be spot-checked
/// - `Low`: weak alignments requiring manual confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Low confidence (≥ low threshold, < medium threshold).
    Low,
    /// Medium confidence (≥ medium threshold, < high threshold).
    Medium,
    /// High confidence (≥ high threshold).
    High,
}

impl ConfidenceLevel {
    /// Returns a human-readable description of the confidence level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Configurable thresholds for categorizing span scores.
///
/// - Below `low`: uncategorized
/// - `low` to `medium`: [`ConfidenceLevel::Low`]
/// - `medium` to `high`: [`ConfidenceLevel::Medium`]
/// - At or above `high`: [`ConfidenceLevel::High`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    /// Minimum score for high-quality alignments (default: 0.95).
    pub high: f64,
    /// Minimum score for medium-quality alignments (default: 0.80).
    pub medium: f64,
    /// Minimum score to be categorized at all (default: 0.60).
    pub low: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.95,
            medium: 0.80,
            low: 0.60,
        }
    }
}

impl ConfidenceThresholds {
    /// Creates thresholds with strict boundaries.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            high: 0.98,
            medium: 0.90,
            low: 0.75,
        }
    }

    /// Creates thresholds with relaxed boundaries for noisy scans.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            high: 0.90,
            medium: 0.70,
            low: 0.50,
        }
    }

    /// Categorizes a score into a confidence level.
    ///
    /// Returns `None` if the score is below the low threshold.
    #[must_use]
    pub fn categorize(&self, score: f64) -> Option<ConfidenceLevel> {
        if score >= self.high {
            Some(ConfidenceLevel::High)
        } else if score >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else if score >= self.low {
            Some(ConfidenceLevel::Low)
        } else {
            None
        }
    }

    pub(crate) fn is_ordered(&self) -> bool {
        self.low <= self.medium && self.medium <= self.high
    }
}
