//! Writing alignment results: JSONL export and a highlighted text view.

pub mod error;
pub mod jsonl;
pub mod view;

pub use error::{OutputError, Result};
pub use jsonl::{record_to_json_line, write_jsonl};
pub use view::{document_header, highlight_spans, preview_line};
