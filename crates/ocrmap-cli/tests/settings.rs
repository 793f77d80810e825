//! Tests for settings file loading and overrides.

use std::fs;

use ocrmap_cli::settings::{ConfigOverrides, load_config_file, resolve_config};
use ocrmap_core::{AlignConfig, SimilarityMetric};

#[test]
fn no_file_and_no_overrides_gives_defaults() {
    let config = resolve_config(None, &ConfigOverrides::default()).expect("resolve");
    assert_eq!(config, AlignConfig::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ocrmap.toml");
    fs::write(
        &path,
        "doc_match_threshold = 0.5\nmetric = \"indel\"\n\n[confidence]\nhigh = 0.9\nmedium = 0.8\nlow = 0.6\n",
    )
    .expect("write settings");

    let config = load_config_file(&path).expect("load");
    assert_eq!(config.doc_match_threshold, 0.5);
    assert_eq!(config.metric, SimilarityMetric::Indel);
    assert_eq!(config.confidence.high, 0.9);
    assert_eq!(config.window_expansion, AlignConfig::default().window_expansion);
    assert!(config.parallel);
}

#[test]
fn overrides_win_over_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ocrmap.toml");
    fs::write(&path, "doc_match_threshold = 0.5\nwindow_expansion = 0.1\n").expect("write");

    let overrides = ConfigOverrides {
        doc_match_threshold: Some(0.2),
        metric: Some(SimilarityMetric::Indel),
        sequential: true,
        ..ConfigOverrides::default()
    };
    let config = resolve_config(Some(&path), &overrides).expect("resolve");
    assert_eq!(config.doc_match_threshold, 0.2);
    assert_eq!(config.window_expansion, 0.1);
    assert_eq!(config.metric, SimilarityMetric::Indel);
    assert!(!config.parallel);
}

#[test]
fn invalid_values_are_rejected() {
    let overrides = ConfigOverrides {
        window_expansion: Some(1.5),
        ..ConfigOverrides::default()
    };
    let err = resolve_config(None, &overrides).unwrap_err();
    assert!(format!("{err:#}").contains("invalid alignment settings"));
}

#[test]
fn unparseable_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "doc_match_threshold = \"high\"\n").expect("write");

    let err = load_config_file(&path).unwrap_err();
    assert!(format!("{err}").contains("broken.toml"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");
    assert!(resolve_config(Some(&path), &ConfigOverrides::default()).is_err());
}
