//! Label Studio JSONL export reader.
//!
//! Each non-blank line is one task. The document text comes from
//! `data.text`; spans come from the `result` list of the first prediction
//! only, with `value.text` as the span text and `value.labels` as labels.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ocrmap_model::{AnnotationDocument, AnnotationSpan};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

const BOM: char = '\u{feff}';

#[derive(Debug, Default, Deserialize)]
struct Task {
    #[serde(default)]
    data: TaskData,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Default, Deserialize)]
struct TaskData {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    result: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultEntry {
    #[serde(default)]
    value: ResultValue,
}

#[derive(Debug, Default, Deserialize)]
struct ResultValue {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    labels: Vec<String>,
}

/// Parses one JSONL line into an annotation document.
///
/// # Errors
///
/// Returns the JSON error when the line is not a task object.
pub fn parse_annotation_record(line: &str) -> serde_json::Result<AnnotationDocument> {
    let task: Task = serde_json::from_str(line)?;
    let results = task
        .predictions
        .into_iter()
        .next()
        .map(|prediction| prediction.result)
        .unwrap_or_default();

    let mut spans = Vec::with_capacity(results.len());
    for raw in results {
        let entry = ResultEntry::deserialize(&raw)?;
        spans.push(
            AnnotationSpan::new(entry.value.text.unwrap_or_default(), entry.value.labels)
                .with_source(raw),
        );
    }

    Ok(AnnotationDocument::new(
        task.data.text.unwrap_or_default(),
        spans,
    ))
}

/// Loads every task from a Label Studio JSONL export, in file order.
///
/// A leading byte-order mark is ignored and blank lines are skipped.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when the file is missing,
/// [`IngestError::FileRead`] on other I/O failures, and
/// [`IngestError::RecordParse`] for the first malformed line.
pub fn load_annotations(path: &Path) -> Result<Vec<AnnotationDocument>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let content = content.strip_prefix(BOM).unwrap_or(&content);

    let mut documents = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let document = parse_annotation_record(line).map_err(|source| IngestError::RecordParse {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        debug!(line = idx + 1, spans = document.spans.len(), "annotation record");
        documents.push(document);
    }

    info!(
        path = %path.display(),
        documents = documents.len(),
        "annotations loaded"
    );
    Ok(documents)
}
