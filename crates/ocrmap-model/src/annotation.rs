//! Annotated documents as produced by the labeling tool.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One labeled substring asserted by an annotator.
///
/// The span text has no guaranteed relation to any OCR text until it has
/// been aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSpan {
    /// Text the annotator selected.
    pub span_text: String,
    /// Labels attached to the selection.
    pub labels: BTreeSet<String>,
    /// Raw prediction entry this span was parsed from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
}

impl AnnotationSpan {
    pub fn new<I, S>(span_text: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            span_text: span_text.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            source: None,
        }
    }

    /// Attaches the raw record the span came from.
    #[must_use]
    pub fn with_source(mut self, source: serde_json::Value) -> Self {
        self.source = Some(source);
        self
    }
}

/// One annotated document: the full text plus its spans in annotation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDocument {
    pub raw_text: String,
    pub spans: Vec<AnnotationSpan>,
}

impl AnnotationDocument {
    pub fn new(raw_text: impl Into<String>, spans: Vec<AnnotationSpan>) -> Self {
        Self {
            raw_text: raw_text.into(),
            spans,
        }
    }
}
