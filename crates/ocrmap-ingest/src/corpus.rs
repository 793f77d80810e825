//! OCR text folder discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use ocrmap_model::OcrCorpus;
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Lists all `.txt` files in a directory.
///
/// The extension check is case-insensitive. Returns files sorted by
/// filename.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_txt = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));

        if is_txt {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Reads a text file as UTF-8, dropping a leading byte-order mark.
pub fn read_text_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

/// Loads every `.txt` file in `dir` into a corpus keyed by file name.
///
/// # Errors
///
/// Returns [`IngestError::DirectoryNotFound`] if `dir` is missing, or a read
/// error for the first file that cannot be decoded.
pub fn load_corpus(dir: &Path) -> Result<OcrCorpus> {
    let mut corpus = OcrCorpus::new();
    for path in list_text_files(dir)? {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!(path = %path.display(), "skipping non-UTF-8 file name");
            continue;
        };
        let text = read_text_file(&path)?;
        debug!(file = name, chars = text.chars().count(), "ocr text");
        corpus.insert(name, text);
    }
    info!(dir = %dir.display(), files = corpus.len(), "ocr corpus loaded");
    Ok(corpus)
}
