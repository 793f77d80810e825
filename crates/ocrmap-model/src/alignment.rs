//! Alignment results.

use std::collections::BTreeSet;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// How a span was located in the OCR text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Literal occurrence of the normalized span.
    Exact,
    /// Best window found by the approximate search.
    Approximate,
    /// Nothing to compare or nothing similar found.
    Unmapped,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Approximate => "approximate",
            Self::Unmapped => "unmapped",
        }
    }
}

/// Result of matching one document's text against the whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMatch {
    /// Best file, `None` only when the corpus is empty.
    pub matched_file: Option<String>,
    /// Whole-text similarity to `matched_file` (0.0 to 1.0).
    pub match_score: f64,
}

impl DocumentMatch {
    pub fn unmatched() -> Self {
        Self {
            matched_file: None,
            match_score: 0.0,
        }
    }
}

/// Result of aligning one annotation span within the matched OCR text.
///
/// Offsets are char positions in the whitespace-normalized OCR text, and
/// `mapped_text` is exactly that slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanMatch {
    pub labels: BTreeSet<String>,
    pub span_text: String,
    pub mapped_file: Option<String>,
    pub mapped_score: f64,
    pub mapped_text: Option<String>,
    pub mapped_start: Option<usize>,
    pub mapped_end: Option<usize>,
    pub match_kind: MatchKind,
    /// Raw prediction entry the span was parsed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
}

impl SpanMatch {
    /// Char range of the mapped text, when the span was located.
    pub fn range(&self) -> Option<Range<usize>> {
        match (self.mapped_start, self.mapped_end) {
            (Some(start), Some(end)) => Some(start..end),
            _ => None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.match_kind != MatchKind::Unmapped
    }
}

/// Final output unit: one per annotation document, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRecord {
    /// Leading characters of the normalized document text.
    pub preview: String,
    pub matched_file: Option<String>,
    pub match_score: f64,
    /// Set when `match_score` fell below the document-match threshold.
    pub weak_match: bool,
    pub spans: Vec<SpanMatch>,
}

impl AlignedRecord {
    pub fn mapped_span_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_mapped()).count()
    }
}
