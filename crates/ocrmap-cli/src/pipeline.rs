//! Load, align, and write stages shared by the commands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use ocrmap_core::{AlignConfig, Aligner};
use ocrmap_ingest::{load_annotations, load_corpus};
use ocrmap_model::{AlignedRecord, AnnotationDocument, OcrCorpus};
use tracing::{info, info_span, warn};

/// Annotated documents and the OCR corpus they are aligned against.
#[derive(Debug)]
pub struct Inputs {
    pub documents: Vec<AnnotationDocument>,
    pub corpus: OcrCorpus,
}

pub fn load_inputs(annotations: &Path, ocr_dir: &Path) -> Result<Inputs> {
    let span = info_span!(
        "ingest",
        annotations = %annotations.display(),
        ocr_dir = %ocr_dir.display()
    );
    let _guard = span.enter();

    let documents = load_annotations(annotations)
        .with_context(|| format!("load annotations from {}", annotations.display()))?;
    let corpus =
        load_corpus(ocr_dir).with_context(|| format!("load OCR texts from {}", ocr_dir.display()))?;
    if corpus.is_empty() {
        warn!(ocr_dir = %ocr_dir.display(), "no .txt files found; every span will be unmapped");
    }
    info!(
        documents = documents.len(),
        ocr_files = corpus.len(),
        "inputs loaded"
    );
    Ok(Inputs { documents, corpus })
}

/// Document `id`, counting from 1 as `list` prints them.
pub fn select_document(inputs: &Inputs, id: usize) -> Result<&AnnotationDocument> {
    id.checked_sub(1)
        .and_then(|idx| inputs.documents.get(idx))
        .ok_or_else(|| anyhow!("document {id} not found"))
}

/// Aligns every document, on a dedicated pool of `jobs` threads when given.
pub fn align_inputs(
    inputs: &Inputs,
    config: AlignConfig,
    jobs: Option<usize>,
) -> Result<Vec<AlignedRecord>> {
    let aligner = Aligner::new(config, &inputs.corpus);
    let start = Instant::now();
    let records = match jobs {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("build worker pool")?;
            pool.install(|| aligner.align_all(&inputs.documents))
        }
        None => aligner.align_all(&inputs.documents),
    };
    info!(
        documents = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "alignment complete"
    );
    Ok(records)
}
