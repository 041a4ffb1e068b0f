//! Testes de integração para o carregamento da configuração.

use std::path::PathBuf;
use tempfile::TempDir;

use recency::types::config::{CacheConfig, Config};
use recency::{Capacity, RecencyError, RecencyList, SyncRecencyList};

fn temp_config_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("recency.toml");
    (temp_dir, path)
}

#[test]
fn test_save_and_load() {
    let (_temp_dir, path) = temp_config_path();

    let mut config = Config::default();
    config.cache.capacity = Capacity::Limited(64);
    config.logging.level = "debug".to_string();
    config.save(&path).expect("Failed to save config");

    let loaded = Config::load(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_load_sizes_list() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[cache]\ncapacity = 2\n").unwrap();

    let config = Config::load(&path).unwrap();
    let mut list = RecencyList::from_config(&config.cache);
    list.extend(["a", "b", "c"]);
    assert_eq!(list.list_items(), vec!["b", "c"]);
}

#[test]
fn test_load_unbounded() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[cache]\ncapacity = -1\n").unwrap();

    let config = Config::load(&path).unwrap();
    let list: SyncRecencyList<u32> = SyncRecencyList::from(RecencyList::from_config(&config.cache));
    assert!(list.capacity().is_unbounded());
}

#[test]
fn test_load_rejects_invalid_capacity() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[cache]\ncapacity = -5\n").unwrap();

    assert!(matches!(Config::load(&path), Err(RecencyError::TomlParse(_))));
}

#[test]
fn test_load_rejects_unknown_log_format() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[logging]\nformat = \"yaml\"\n").unwrap();

    assert!(matches!(Config::load(&path), Err(RecencyError::Config(_))));
}

#[test]
fn test_load_missing_file() {
    let (_temp_dir, path) = temp_config_path();
    assert!(matches!(Config::load(&path), Err(RecencyError::Io(_))));
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.cache, CacheConfig::default());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_or_default_missing_file() {
    let (_temp_dir, path) = temp_config_path();

    let config = Config::load_or_default_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_or_default_reads_existing_file() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[cache]\ncapacity = 4\n").unwrap();

    let config = Config::load_or_default_from(&path).unwrap();
    assert_eq!(config.cache.capacity, Capacity::Limited(4));
}

#[test]
fn test_load_or_default_keeps_invalid_capacity_error() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[cache]\ncapacity = -5\n").unwrap();

    let err = Config::load_or_default_from(&path).unwrap_err();
    assert!(matches!(err, RecencyError::TomlParse(_)));
    assert!(err.to_string().contains("-5"));
}

#[test]
fn test_load_or_default_keeps_validation_error() {
    let (_temp_dir, path) = temp_config_path();
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(matches!(
        Config::load_or_default_from(&path),
        Err(RecencyError::Config(_))
    ));
}
