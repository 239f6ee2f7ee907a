//! Tests for root folder resolution and config file handling
//!
//! Tests that touch BASKET_ROOT_FOLDER are marked #[serial] so they do not
//! race each other on the process environment.

use basket_common::config::{
    CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig, DEFAULT_PORT,
    ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(!defaults.root_folder.as_os_str().is_empty());
    assert!(defaults.root_folder.ends_with("basket") || defaults.root_folder.ends_with("basket_data"));
    assert_eq!(defaults.port, DEFAULT_PORT);
    assert_eq!(defaults.log_level, "info");
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let resolver = RootFolderResolver::with_config(None, TomlConfig::default());

    assert_eq!(
        resolver.resolve(),
        CompiledDefaults::for_current_platform().root_folder
    );
}

#[test]
#[serial]
fn test_resolver_env_var_beats_config_file() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/basket-test-env-folder");

    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/basket-from-toml")),
        ..Default::default()
    };
    let resolver = RootFolderResolver::with_config(None, toml);

    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/basket-test-env-folder"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_cli_beats_env_var() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/basket-test-env-folder");

    let resolver =
        RootFolderResolver::with_config(Some(PathBuf::from("/tmp/basket-cli")), TomlConfig::default());

    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/basket-cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_uses_config_file_root_folder() {
    env::remove_var(ROOT_FOLDER_ENV);

    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/basket-from-toml")),
        ..Default::default()
    };
    let resolver = RootFolderResolver::with_config(None, toml);

    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/basket-from-toml"));
}

#[test]
fn test_config_file_round_trip_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 9000\nlog_level = \"debug\"\n").unwrap();

    let config = TomlConfig::from_file(&path).unwrap();

    assert_eq!(config.port, Some(9000));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert!(config.root_folder.is_none());
}

#[test]
fn test_invalid_config_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();

    let err = TomlConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, basket_common::Error::Config(_)));
}

#[test]
fn test_initializer_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("basket");
    let initializer = RootFolderInitializer::new(root.clone());

    assert!(!initializer.database_exists());
    initializer.ensure_directory_exists().unwrap();

    assert!(root.is_dir());
    // Idempotent
    initializer.ensure_directory_exists().unwrap();
}
