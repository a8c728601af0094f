//! Tests for loading completer configuration files.

use std::io::Write;

use horizon_completer::{CompleterConfig, ConfigError};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_height = 180.0").unwrap();
    writeln!(file, "scroll_margin = 4.0").unwrap();

    let config = CompleterConfig::load(file.path()).unwrap();
    assert_eq!(config.max_height, 180.0);
    assert_eq!(config.scroll_margin, 4.0);
    assert_eq!(config.min_width, CompleterConfig::default().min_width);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = CompleterConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_invalid_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("completer.toml");
    std::fs::write(&path, "min_width = -5.0\n").unwrap();
    let err = CompleterConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("min_width"));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("completer.toml");
    let config = CompleterConfig {
        item_height: 24.0,
        border_offset: 0.0,
        ..CompleterConfig::default()
    };
    std::fs::write(&path, config.to_toml_string()).unwrap();
    assert_eq!(CompleterConfig::load(&path).unwrap(), config);
}
