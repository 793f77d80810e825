//! Tests for JSONL export.

use std::collections::BTreeSet;
use std::fs;

use ocrmap_model::{AlignedRecord, MatchKind, SpanMatch};
use ocrmap_output::{record_to_json_line, write_jsonl};

fn exact_record() -> AlignedRecord {
    AlignedRecord {
        preview: "Patta No 118 Survey No 42".to_string(),
        matched_file: Some("patta_07.txt".to_string()),
        match_score: 1.0,
        weak_match: false,
        spans: vec![
            SpanMatch {
                labels: BTreeSet::from(["PATTA_NO".to_string()]),
                span_text: "118".to_string(),
                mapped_file: Some("patta_07.txt".to_string()),
                mapped_score: 1.0,
                mapped_text: Some("118".to_string()),
                mapped_start: Some(9),
                mapped_end: Some(12),
                match_kind: MatchKind::Exact,
                source: None,
            },
            SpanMatch {
                labels: BTreeSet::from(["OWNER".to_string()]),
                span_text: "".to_string(),
                mapped_file: Some("patta_07.txt".to_string()),
                mapped_score: 0.0,
                mapped_text: None,
                mapped_start: None,
                mapped_end: None,
                match_kind: MatchKind::Unmapped,
                source: None,
            },
        ],
    }
}

#[test]
fn exact_record_snapshot() {
    insta::assert_json_snapshot!("exact_record", exact_record());
}

#[test]
fn json_line_is_single_line_with_raw_unicode() {
    let mut record = exact_record();
    record.preview = "பட்டா எண் 42".to_string();
    let line = record_to_json_line(&record).expect("serialize");
    assert!(!line.contains('\n'));
    assert!(line.contains("பட்டா எண் 42"));
    assert!(!line.contains("\\u"));
}

#[test]
fn writes_one_line_per_record_and_creates_parents() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("outputs").join("mapped_entities.jsonl");
    let records = vec![exact_record(), exact_record()];

    let written = write_jsonl(&path, &records).expect("write jsonl");
    assert_eq!(written, 2);

    let contents = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(contents.ends_with('\n'));

    let parsed: AlignedRecord = serde_json::from_str(lines[0]).expect("parse line");
    assert_eq!(parsed, records[0]);
}

#[test]
fn empty_batch_writes_empty_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.jsonl");
    assert_eq!(write_jsonl(&path, &[]).expect("write jsonl"), 0);
    assert_eq!(fs::read_to_string(&path).expect("read back"), "");
}
