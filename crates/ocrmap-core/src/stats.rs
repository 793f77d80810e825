//! Run-level statistics over aligned records.

use std::collections::BTreeMap;

use ocrmap_model::{AlignedRecord, MatchKind};

use crate::confidence::{ConfidenceLevel, ConfidenceThresholds};

/// Counts collected from one alignment run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentStats {
    pub documents: usize,
    /// Documents flagged below the document-match threshold.
    pub weak_documents: usize,
    /// Documents with no corpus file at all.
    pub unmatched_documents: usize,
    pub spans: usize,
    pub spans_by_kind: BTreeMap<MatchKind, usize>,
    /// Mapped spans per confidence level; scores below `low` are not counted.
    pub spans_by_level: BTreeMap<ConfidenceLevel, usize>,
    sum_doc_score: f64,
}

impl AlignmentStats {
    pub fn from_records(records: &[AlignedRecord], thresholds: &ConfidenceThresholds) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.documents += 1;
            stats.sum_doc_score += record.match_score;
            if record.weak_match {
                stats.weak_documents += 1;
            }
            if record.matched_file.is_none() {
                stats.unmatched_documents += 1;
            }
            for span in &record.spans {
                stats.spans += 1;
                *stats.spans_by_kind.entry(span.match_kind).or_insert(0) += 1;
                if !span.is_mapped() {
                    continue;
                }
                if let Some(level) = thresholds.categorize(span.mapped_score) {
                    *stats.spans_by_level.entry(level).or_insert(0) += 1;
                }
            }
        }
        stats
    }

    pub fn kind_count(&self, kind: MatchKind) -> usize {
        self.spans_by_kind.get(&kind).copied().unwrap_or(0)
    }

    pub fn level_count(&self, level: ConfidenceLevel) -> usize {
        self.spans_by_level.get(&level).copied().unwrap_or(0)
    }

    /// Mean document score, if any documents were aligned.
    #[must_use]
    pub fn mean_document_score(&self) -> Option<f64> {
        if self.documents == 0 {
            return None;
        }
        Some(self.sum_doc_score / self.documents as f64)
    }
}
