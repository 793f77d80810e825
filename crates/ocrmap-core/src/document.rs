//! Document-level matching: pick the OCR file a document was read from.

use ocrmap_model::{DocumentMatch, OcrCorpus};
use tracing::debug;

use crate::normalize::normalize;
use crate::similarity::SimilarityMetric;

/// One corpus entry with its normalized text.
#[derive(Debug, Clone)]
pub struct PreparedText {
    pub file: String,
    pub normalized: String,
    chars: Vec<char>,
}

impl PreparedText {
    fn new(file: &str, raw: &str) -> Self {
        let normalized = normalize(raw);
        let chars = normalized.chars().collect();
        Self {
            file: file.to_string(),
            normalized,
            chars,
        }
    }
}

/// Corpus with every text normalized once, kept in file-name order.
#[derive(Debug, Clone, Default)]
pub struct PreparedCorpus {
    entries: Vec<PreparedText>,
}

impl PreparedCorpus {
    pub fn new(corpus: &OcrCorpus) -> Self {
        Self {
            entries: corpus
                .iter()
                .map(|(file, text)| PreparedText::new(file, text))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized text of `file`, if present.
    pub fn normalized(&self, file: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|entry| entry.file.as_str().cmp(file))
            .ok()
            .map(|idx| self.entries[idx].normalized.as_str())
    }

    /// Best-matching file for an already normalized document text.
    ///
    /// Ties keep the first file in name order. The first file is taken even
    /// at score 0.0, so only an empty corpus yields no file.
    pub fn best_match(&self, normalized_doc: &str, metric: SimilarityMetric) -> DocumentMatch {
        let doc: Vec<char> = normalized_doc.chars().collect();
        let mut best: Option<(&str, f64)> = None;
        for entry in &self.entries {
            let score = metric.score(&doc, &entry.chars);
            debug!(file = %entry.file, score, "document candidate");
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((entry.file.as_str(), score)),
            }
        }
        match best {
            Some((file, score)) => DocumentMatch {
                matched_file: Some(file.to_string()),
                match_score: score,
            },
            None => DocumentMatch::unmatched(),
        }
    }
}

/// Selects the corpus file most similar to `normalized_doc_text`.
pub fn match_document(
    normalized_doc_text: &str,
    corpus: &OcrCorpus,
    metric: SimilarityMetric,
) -> DocumentMatch {
    PreparedCorpus::new(corpus).best_match(normalized_doc_text, metric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[(&str, &str)]) -> OcrCorpus {
        entries.iter().copied().collect()
    }

    #[test]
    fn empty_corpus_matches_nothing() {
        let result = match_document("anything", &OcrCorpus::new(), SimilarityMetric::default());
        assert_eq!(result, DocumentMatch::unmatched());
    }

    #[test]
    fn picks_most_similar_file() {
        let corpus = corpus(&[
            ("a.txt", "invoice total due"),
            ("b.txt", "the quick brown  fox\njumps"),
            ("c.txt", "lorem ipsum"),
        ]);
        let result = match_document(
            "the quick brown fox jumps",
            &corpus,
            SimilarityMetric::default(),
        );
        assert_eq!(result.matched_file.as_deref(), Some("b.txt"));
        assert_eq!(result.match_score, 1.0);
    }

    #[test]
    fn ties_keep_first_file_in_name_order() {
        let corpus = corpus(&[("z.txt", "same text"), ("m.txt", "same text")]);
        let result = match_document("same text", &corpus, SimilarityMetric::default());
        assert_eq!(result.matched_file.as_deref(), Some("m.txt"));
    }

    #[test]
    fn dissimilar_document_still_gets_a_file() {
        let corpus = corpus(&[("a.txt", "aaaa"), ("b.txt", "bbbb")]);
        let result = match_document("zzzz", &corpus, SimilarityMetric::default());
        assert_eq!(result.matched_file.as_deref(), Some("a.txt"));
        assert_eq!(result.match_score, 0.0);
    }

    #[test]
    fn empty_document_scores_zero_against_first_file() {
        let corpus = corpus(&[("a.txt", "text")]);
        let result = match_document("", &corpus, SimilarityMetric::default());
        assert_eq!(result.matched_file.as_deref(), Some("a.txt"));
        assert_eq!(result.match_score, 0.0);
    }

    #[test]
    fn prepared_corpus_looks_up_normalized_text() {
        let prepared = PreparedCorpus::new(&corpus(&[("b.txt", " x \n y "), ("a.txt", "a")]));
        assert_eq!(prepared.normalized("b.txt"), Some("x y"));
        assert_eq!(prepared.normalized("c.txt"), None);
        assert_eq!(prepared.len(), 2);
    }
}
