//! Library side of the `ocrmap` binary: logging, settings, and shared stages.

pub mod logging;
pub mod pipeline;
pub mod settings;
