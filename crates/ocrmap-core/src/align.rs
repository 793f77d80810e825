//! Alignment orchestration: document match, then per-span matching.

use ocrmap_model::{AlignedRecord, AnnotationDocument, OcrCorpus, SpanMatch};
use rayon::prelude::*;
use tracing::{debug, info_span, warn};

use crate::config::AlignConfig;
use crate::document::PreparedCorpus;
use crate::normalize::normalize;
use crate::span::SpanMatcher;

/// Aligns annotation documents against one prepared OCR corpus.
///
/// The corpus is normalized once at construction and shared read-only
/// between documents, so batches can run in parallel.
#[derive(Debug, Clone)]
pub struct Aligner {
    config: AlignConfig,
    corpus: PreparedCorpus,
}

impl Aligner {
    pub fn new(config: AlignConfig, corpus: &OcrCorpus) -> Self {
        Self {
            config,
            corpus: PreparedCorpus::new(corpus),
        }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    pub fn corpus(&self) -> &PreparedCorpus {
        &self.corpus
    }

    /// Aligns a single document.
    ///
    /// A document score below `doc_match_threshold` is logged as a warning
    /// and flagged on the record; span matching still runs.
    pub fn align(&self, document: &AnnotationDocument) -> AlignedRecord {
        let doc_text = normalize(&document.raw_text);
        let doc_match = self.corpus.best_match(&doc_text, self.config.metric);

        let weak_match = doc_match.match_score < self.config.doc_match_threshold;
        if weak_match {
            warn!(
                best_file = doc_match.matched_file.as_deref().unwrap_or("-"),
                score = doc_match.match_score,
                "low overall document match, span results are less trustworthy"
            );
        }

        let target = doc_match
            .matched_file
            .as_deref()
            .and_then(|file| self.corpus.normalized(file))
            .unwrap_or_default();
        let matcher = SpanMatcher::from_normalized(&self.config, target.to_string());

        let spans = document
            .spans
            .iter()
            .map(|span| {
                let found = matcher.locate(&span.span_text);
                let mapped_text = found.range.clone().and_then(|range| matcher.slice(range));
                SpanMatch {
                    labels: span.labels.clone(),
                    span_text: span.span_text.clone(),
                    mapped_file: doc_match.matched_file.clone(),
                    mapped_score: found.score,
                    mapped_text,
                    mapped_start: found.start(),
                    mapped_end: found.end(),
                    match_kind: found.kind,
                    source: span.source.clone(),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            matched_file = doc_match.matched_file.as_deref().unwrap_or("-"),
            match_score = doc_match.match_score,
            span_count = spans.len(),
            "document aligned"
        );

        AlignedRecord {
            preview: doc_text.chars().take(self.config.preview_chars).collect(),
            matched_file: doc_match.matched_file,
            match_score: doc_match.match_score,
            weak_match,
            spans,
        }
    }

    /// Aligns every document, returning records in input order.
    ///
    /// Each document runs inside a `document` span carrying its 1-based
    /// index so warnings can be traced back to the input line.
    pub fn align_all(&self, documents: &[AnnotationDocument]) -> Vec<AlignedRecord> {
        let align_one = |(idx, document): (usize, &AnnotationDocument)| {
            let span = info_span!("document", index = idx + 1);
            span.in_scope(|| self.align(document))
        };
        if self.config.parallel {
            documents.par_iter().enumerate().map(align_one).collect()
        } else {
            documents.iter().enumerate().map(align_one).collect()
        }
    }
}

/// Aligns one document against `corpus`.
pub fn align(
    document: &AnnotationDocument,
    corpus: &OcrCorpus,
    config: &AlignConfig,
) -> AlignedRecord {
    Aligner::new(config.clone(), corpus).align(document)
}
