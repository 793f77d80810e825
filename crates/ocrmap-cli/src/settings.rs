//! Alignment settings: TOML file plus command-line overrides.
//!
//! A settings file holds any subset of the [`AlignConfig`] fields; missing
//! fields keep their defaults.
//!
//! ```toml
//! doc_match_threshold = 0.4
//! metric = "indel"
//!
//! [confidence]
//! high = 0.9
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ocrmap_core::{AlignConfig, SimilarityMetric};
use tracing::info;

/// Values given on the command line, applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub doc_match_threshold: Option<f64>,
    pub window_expansion: Option<f64>,
    pub metric: Option<SimilarityMetric>,
    /// Disable parallel alignment.
    pub sequential: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: AlignConfig) -> AlignConfig {
        if let Some(threshold) = self.doc_match_threshold {
            config = config.with_doc_match_threshold(threshold);
        }
        if let Some(expansion) = self.window_expansion {
            config = config.with_window_expansion(expansion);
        }
        if let Some(metric) = self.metric {
            config = config.with_metric(metric);
        }
        if self.sequential {
            config = config.with_parallel(false);
        }
        config
    }
}

/// Parses a settings file.
pub fn load_config_file(path: &Path) -> Result<AlignConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let config: AlignConfig = toml::from_str(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    info!(path = %path.display(), "loaded settings");
    Ok(config)
}

/// Defaults, then the settings file if given, then overrides; validated.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AlignConfig> {
    let base = match path {
        Some(path) => load_config_file(path)?,
        None => AlignConfig::default(),
    };
    let config = overrides.apply(base);
    config.validate().context("invalid alignment settings")?;
    Ok(config)
}
