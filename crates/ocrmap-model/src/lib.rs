pub mod alignment;
pub mod annotation;
pub mod corpus;

pub use alignment::{AlignedRecord, DocumentMatch, MatchKind, SpanMatch};
pub use annotation::{AnnotationDocument, AnnotationSpan};
pub use corpus::OcrCorpus;
