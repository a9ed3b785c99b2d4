//! Catalog extension files and configuration
use std::fs;

use alloy_language_server::catalog::Catalog;
use alloy_language_server::config::{Args, Config};
use alloy_language_server::features::{completion_items, hover_markdown};
use alloy_language_server::validation::{validate_with_catalog, Severity};
use clap::Parser;

const EXTENSION: &str = r#"
[[components]]
name = "pyroscope.write"
description = "Sends profiles to Pyroscope."

[[components]]
name = "loki.write"
description = "Ships log entries to Loki."

[[attributes]]
name = "external_labels"
"#;

#[test]
fn test_extension_file_extends_catalog() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, EXTENSION).expect("write catalog");

    let catalog = Catalog::load(&[&path]);

    assert!(catalog.is_known_component("pyroscope.write"));
    assert_eq!(
        catalog.describe_component("loki.write"),
        Some("Ships log entries to Loki.")
    );
    assert_eq!(catalog.attributes().last().unwrap().name, "external_labels");

    let hover = hover_markdown(&catalog, "pyroscope.write").unwrap();
    assert!(hover.ends_with("Sends profiles to Pyroscope."));

    let labels: Vec<String> = completion_items(&catalog)
        .into_iter()
        .map(|item| item.label)
        .collect();
    assert!(labels.contains(&"pyroscope.write".to_string()));
    assert_eq!(labels.last().map(String::as_str), Some("external_labels"));
}

#[test]
fn test_extended_catalog_silences_unknown_type_warning() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(&path, EXTENSION).expect("write catalog");

    let content = "pyroscope.write \"profiles\" {\n}";

    let builtin = validate_with_catalog(content, Catalog::builtin());
    assert_eq!(builtin.issues.len(), 1);
    assert_eq!(builtin.issues[0].severity, Severity::Warning);

    let extended = validate_with_catalog(content, &Catalog::load(&[&path]));
    assert!(extended.is_empty());
}

#[test]
fn test_invalid_extension_file_is_skipped() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let broken = dir.path().join("broken.toml");
    let good = dir.path().join("good.toml");
    fs::write(&broken, "[[components]]\nname = ").expect("write broken catalog");
    fs::write(&good, EXTENSION).expect("write catalog");

    let catalog = Catalog::load(&[&broken, &good]);
    assert!(catalog.is_known_component("pyroscope.write"));
    assert!(catalog.is_known_component("prometheus.scrape"));
}

#[test]
fn test_later_files_win() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");
    fs::write(
        &first,
        "[[components]]\nname = \"loki.write\"\ndescription = \"first\"\n",
    )
    .expect("write first catalog");
    fs::write(
        &second,
        "[[components]]\nname = \"loki.write\"\ndescription = \"second\"\n",
    )
    .expect("write second catalog");

    let catalog = Catalog::load(&[&first, &second]);
    assert_eq!(catalog.describe_component("loki.write"), Some("second"));
}

#[test]
fn test_config_from_args() {
    let args = Args::parse_from(["alloy-ls", "--catalog", "team.toml", "--log-level", "warn"]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.log_level, "warn");
    assert_eq!(
        config.catalog_paths.last().and_then(|p| p.to_str()),
        Some("team.toml")
    );
}

#[test]
fn test_config_defaults() {
    let args = Args::parse_from(["alloy-ls"]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.log_level, "info");
    assert!(config
        .catalog_paths
        .iter()
        .all(|p| p.ends_with("alloy-ls/catalog.toml")));
}
