//! Fuzzy alignment of annotated spans against OCR text.
//!
//! The engine runs in two stages. Document matching picks the OCR file most
//! similar to the whole annotated text; span matching then locates each
//! annotated span inside that file, exactly if possible and otherwise with a
//! bounded sliding-window search.
//!
//! # Example
//!
//! ```
//! use ocrmap_core::{AlignConfig, Aligner};
//! use ocrmap_model::{AnnotationDocument, AnnotationSpan, OcrCorpus};
//!
//! let corpus: OcrCorpus = [("a.txt", "the quick brown fox")].into_iter().collect();
//! let doc = AnnotationDocument::new(
//!     "the quick brown fox",
//!     vec![AnnotationSpan::new("quick brown", ["PHRASE"])],
//! );
//! let record = Aligner::new(AlignConfig::default(), &corpus).align(&doc);
//! assert_eq!(record.spans[0].mapped_start, Some(4));
//! ```

#![deny(unsafe_code)]

pub mod align;
pub mod confidence;
pub mod config;
pub mod document;
pub mod normalize;
pub mod similarity;
pub mod span;
pub mod stats;

pub use align::{Aligner, align};
pub use confidence::{ConfidenceLevel, ConfidenceThresholds};
pub use config::{AlignConfig, ConfigError};
pub use document::{PreparedCorpus, match_document};
pub use normalize::normalize;
pub use similarity::{SimilarityMetric, similarity};
pub use span::{BestMatch, SpanMatcher, find_best_match};
pub use stats::AlignmentStats;
