use std::path::PathBuf;

use ocrmap_core::AlignmentStats;

#[derive(Debug)]
pub struct MapResult {
    pub output: PathBuf,
    pub stats: AlignmentStats,
}
