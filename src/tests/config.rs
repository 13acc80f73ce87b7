use super::Config;
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::parse("", "inline").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.lookahead, 100);
    assert_eq!(config.line_height, 20);
    assert!(config.animations);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = Config::parse("lookahead = 40\nanimations = false\n", "inline").unwrap();
    assert_eq!(config.lookahead, 40);
    assert!(!config.animations);
    assert_eq!(config.scroll_step, 3);
    assert_eq!(config.compact_width, 80);
}

#[test]
fn test_invalid_value_is_reported_with_origin() {
    let err = Config::parse("line_height = \"tall\"\n", "folio.toml").unwrap_err();
    match err {
        Error::Config { path, .. } => assert_eq!(path, "folio.toml"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "line_height = 16\ntick_rate_ms = 16").unwrap();

    let config = Config::from_path(file.path()).unwrap();
    assert_eq!(config.line_height, 16);
    assert_eq!(config.tick_rate_ms, 16);
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
