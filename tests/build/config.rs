//! Index configuration files.

use std::fs;

use autocomplete::{Error, IndexConfig, MAX_PREFIX};
use tempfile::NamedTempFile;

#[test]
fn test_config_file_overrides_max_prefix() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{ "maxPrefix": 3 }"#).unwrap();

    let config = IndexConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.max_prefix, 3);
}

#[test]
fn test_empty_object_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "{}").unwrap();

    let config = IndexConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.max_prefix, MAX_PREFIX);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{ "max_prefix": 3 }"#).unwrap();

    let err = IndexConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_missing_config_is_io_error() {
    let err = IndexConfig::from_json_file("/nonexistent/autocomplete.json").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
