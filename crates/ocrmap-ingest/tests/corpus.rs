//! Tests for OCR folder discovery and loading.

use std::fs;
use std::path::Path;

use ocrmap_ingest::{IngestError, list_text_files, load_corpus};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn lists_only_txt_files_sorted() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "b_scan.txt", "b");
    write(dir.path(), "A_SCAN.TXT", "a");
    write(dir.path(), "notes.md", "skip");
    write(dir.path(), "scan.txt.bak", "skip");
    fs::create_dir(dir.path().join("nested.txt")).expect("create dir");

    let files = list_text_files(dir.path()).expect("list txt");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A_SCAN.TXT", "b_scan.txt"]);
}

#[test]
fn loads_corpus_keyed_by_file_name_without_bom() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "page_2.txt", "\u{feff}Survey No 42");
    write(dir.path(), "page_1.txt", "Patta No 118\n");

    let corpus = load_corpus(dir.path()).expect("load corpus");
    let names: Vec<&str> = corpus.file_names().collect();
    assert_eq!(names, vec!["page_1.txt", "page_2.txt"]);
    assert_eq!(corpus.get("page_2.txt"), Some("Survey No 42"));
    assert_eq!(corpus.get("page_1.txt"), Some("Patta No 118\n"));
}

#[test]
fn empty_directory_gives_empty_corpus() {
    let dir = tempfile::tempdir().expect("temp dir");
    let corpus = load_corpus(dir.path()).expect("load corpus");
    assert!(corpus.is_empty());
}

#[test]
fn missing_directory_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("ocr_texts");
    let err = load_corpus(&missing).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { ref path } if path == &missing));
}
