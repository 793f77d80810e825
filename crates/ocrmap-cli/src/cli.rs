//! CLI argument definitions for the OCR span mapper.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ocrmap_cli::settings::ConfigOverrides;
use ocrmap_core::SimilarityMetric;

#[derive(Parser)]
#[command(
    name = "ocrmap",
    version,
    about = "Map Label Studio annotation spans onto OCR text",
    long_about = "Align human-annotated Label Studio spans with the OCR text files\n\
                  they were transcribed from.\n\n\
                  Each annotated document is matched to its most similar OCR file,\n\
                  then every labeled span is located inside that file by exact or\n\
                  approximate search."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Align every annotated document and write the results as JSONL.
    Map(MapArgs),

    /// List annotated documents with their matched OCR file.
    List(InputArgs),

    /// Show one document's spans highlighted in its OCR text.
    Show(ShowArgs),
}

/// Inputs and tuning shared by every command.
#[derive(Args)]
pub struct InputArgs {
    /// Label Studio JSONL export with pre-annotations.
    #[arg(long = "annotations", alias = "labelstudio", value_name = "JSONL")]
    pub annotations: PathBuf,

    /// Folder with OCR .txt files.
    #[arg(long = "ocr-dir", alias = "ocr-folder", value_name = "DIR")]
    pub ocr_dir: PathBuf,

    /// TOML file with alignment settings.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Document score below which a match is reported as weak.
    #[arg(long = "doc-threshold", value_name = "SCORE")]
    pub doc_threshold: Option<f64>,

    /// Relative spread of window sizes around the span length.
    #[arg(long = "window-expansion", value_name = "RATIO")]
    pub window_expansion: Option<f64>,

    /// Similarity measure for document and span scoring.
    #[arg(long = "metric", value_enum)]
    pub metric: Option<MetricArg>,

    /// Number of worker threads (default: one per core).
    #[arg(long = "jobs", short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Align documents one at a time on the current thread.
    #[arg(long = "sequential", conflicts_with = "jobs")]
    pub sequential: bool,
}

impl InputArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            doc_match_threshold: self.doc_threshold,
            window_expansion: self.window_expansion,
            metric: self.metric.map(SimilarityMetric::from),
            sequential: self.sequential,
        }
    }
}

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output JSONL path.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        default_value = "outputs/mapped_entities.jsonl"
    )]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct ShowArgs {
    /// 1-based document number, as printed by `list`.
    #[arg(value_name = "ID")]
    pub id: usize,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// Matched-block ratio (Ratcliff/Obershelp).
    BlockMatching,
    /// Normalized InDel similarity.
    Indel,
}

impl From<MetricArg> for SimilarityMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::BlockMatching => Self::BlockMatching,
            MetricArg::Indel => Self::Indel,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
