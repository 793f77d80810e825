pub mod annotations;
pub mod corpus;
pub mod error;

pub use annotations::{load_annotations, parse_annotation_record};
pub use corpus::{list_text_files, load_corpus, read_text_file};
pub use error::{IngestError, Result};
