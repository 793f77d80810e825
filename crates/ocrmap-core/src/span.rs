//! Span-level matching: locate an annotated span inside OCR text.
//!
//! An exact search runs first. When the normalized span is not a literal
//! substring of the normalized target, a windowed approximate search scores
//! candidate windows of several sizes at a coarse stride and keeps the best.

use std::ops::{Range, RangeInclusive};

use ocrmap_model::MatchKind;
use tracing::trace;

use crate::config::AlignConfig;
use crate::normalize::normalize;

/// Best location found for a span.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// Char range in the normalized target.
    pub range: Option<Range<usize>>,
    pub score: f64,
    pub kind: MatchKind,
}

impl BestMatch {
    pub fn unmapped() -> Self {
        Self {
            range: None,
            score: 0.0,
            kind: MatchKind::Unmapped,
        }
    }

    pub fn start(&self) -> Option<usize> {
        self.range.as_ref().map(|r| r.start)
    }

    pub fn end(&self) -> Option<usize> {
        self.range.as_ref().map(|r| r.end)
    }
}

/// Matcher bound to one normalized target text.
///
/// Reused for every span of a document so the target is normalized and
/// split into chars only once.
#[derive(Debug, Clone)]
pub struct SpanMatcher<'a> {
    config: &'a AlignConfig,
    target: String,
    target_chars: Vec<char>,
}

impl<'a> SpanMatcher<'a> {
    /// Builds a matcher over `target`, normalizing it first.
    pub fn new(config: &'a AlignConfig, target: &str) -> Self {
        Self::from_normalized(config, normalize(target))
    }

    /// Builds a matcher over text that is already normalized.
    pub fn from_normalized(config: &'a AlignConfig, target: String) -> Self {
        let target_chars = target.chars().collect();
        Self {
            config,
            target,
            target_chars,
        }
    }

    /// The normalized target text offsets refer to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Text covered by a char range of the normalized target.
    pub fn slice(&self, range: Range<usize>) -> Option<String> {
        self.target_chars
            .get(range)
            .map(|chars| chars.iter().collect())
    }

    /// Finds the best location of `span_text` in the target.
    pub fn locate(&self, span_text: &str) -> BestMatch {
        let span = normalize(span_text);
        if span.is_empty() || self.target.is_empty() {
            return BestMatch::unmapped();
        }

        if let Some(byte_start) = self.target.find(&span) {
            let start = self.target[..byte_start].chars().count();
            let end = start + span.chars().count();
            return BestMatch {
                range: Some(start..end),
                score: 1.0,
                kind: MatchKind::Exact,
            };
        }

        let span_chars: Vec<char> = span.chars().collect();
        self.search_windows(&span_chars)
    }

    fn search_windows(&self, span: &[char]) -> BestMatch {
        let Some(sizes) = window_sizes(
            span.len(),
            self.target_chars.len(),
            self.config.window_expansion,
        ) else {
            return BestMatch::unmapped();
        };
        let stride = (span.len() / self.config.stride_divisor.max(1)).max(1);
        let metric = self.config.metric;
        let n = self.target_chars.len();

        let mut best = BestMatch::unmapped();
        for width in sizes {
            for start in (0..=n - width).step_by(stride) {
                let window = &self.target_chars[start..start + width];
                let score = metric.score(span, window);
                if score > best.score {
                    best = BestMatch {
                        range: Some(start..start + width),
                        score,
                        kind: MatchKind::Approximate,
                    };
                    if score > self.config.early_exit_score {
                        trace!(start, width, score, "early exit");
                        return best;
                    }
                }
            }
        }
        best
    }
}

/// Window widths to try for a span of `span_len` chars in a target of
/// `target_len` chars.
///
/// The range is clamped to `[1, target_len]`; a span longer than the target
/// collapses to the single width `target_len`.
pub fn window_sizes(
    span_len: usize,
    target_len: usize,
    expansion: f64,
) -> Option<RangeInclusive<usize>> {
    if span_len == 0 || target_len == 0 {
        return None;
    }
    // Absorb float error so e.g. 10 * 1.3 does not ceil to 14.
    const EPS: f64 = 1e-9;
    let len = span_len as f64;
    let lower = (len * (1.0 - expansion) + EPS).floor().max(1.0) as usize;
    let upper = (len * (1.0 + expansion) - EPS).ceil().max(1.0) as usize;
    let upper = upper.min(target_len);
    let lower = lower.min(upper);
    Some(lower..=upper)
}

/// Locates `span_text` inside `target_text` using `config`.
///
/// Returns [`BestMatch::unmapped`] when either side normalizes to empty or
/// nothing similar is found; callers treat that as "unmapped", not an error.
pub fn find_best_match(span_text: &str, target_text: &str, config: &AlignConfig) -> BestMatch {
    SpanMatcher::new(config, target_text).locate(span_text)
}
