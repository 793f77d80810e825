//! Line-delimited JSON export of aligned records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use ocrmap_model::AlignedRecord;
use tracing::info;

use crate::error::{OutputError, Result};

/// Serializes one record as a single compact JSON line (no trailing newline).
///
/// Non-ASCII text is written as-is, not escaped.
pub fn record_to_json_line(record: &AlignedRecord) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Writes `records` to `path`, one JSON object per line, creating parent
/// directories as needed. Returns the number of records written.
///
/// # Errors
///
/// Returns an [`OutputError`] if the directory or file cannot be written or a
/// record fails to serialize.
pub fn write_jsonl(path: &Path, records: &[AlignedRecord]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for (index, record) in records.iter().enumerate() {
        let line =
            record_to_json_line(record).map_err(|source| OutputError::Serialize { index, source })?;
        writer.write_all(line.as_bytes()).map_err(write_err)?;
        writer.write_all(b"\n").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    info!(path = %path.display(), records = records.len(), "results written");
    Ok(records.len())
}
