use crate::config::{Config, ConfigError};
use bookshelf_config::constants::{
    BOOKSHELF_DATABASE_PATH, BOOKSHELF_DEBUG, BOOKSHELF_HOST, BOOKSHELF_PORT,
};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    env::remove_var(BOOKSHELF_PORT);
    env::remove_var(BOOKSHELF_HOST);
    env::remove_var(BOOKSHELF_DATABASE_PATH);
    env::remove_var(BOOKSHELF_DEBUG);
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.port, 5000);
    assert_eq!(config.database_path, PathBuf::from("books.db"));
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
    assert!(!config.debug);
}

#[test]
#[serial]
fn test_config_from_env_with_all_custom() {
    clear_env();
    env::set_var(BOOKSHELF_PORT, "8080");
    env::set_var(BOOKSHELF_HOST, "0.0.0.0");
    env::set_var(BOOKSHELF_DATABASE_PATH, "/tmp/library/books.db");
    env::set_var(BOOKSHELF_DEBUG, "true");

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(config.database_path, PathBuf::from("/tmp/library/books.db"));
    assert!(config.debug);

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_port() {
    clear_env();
    env::set_var(BOOKSHELF_PORT, "not-a-number");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidPort(_))));

    clear_env();
}

#[test]
#[serial]
fn test_config_port_zero_rejected() {
    clear_env();
    env::set_var(BOOKSHELF_PORT, "0");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::PortOutOfRange(0))));

    clear_env();
}

#[test]
#[serial]
fn test_config_port_too_large() {
    clear_env();
    env::set_var(BOOKSHELF_PORT, "70000");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidPort(_))));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_host() {
    clear_env();
    env::set_var(BOOKSHELF_HOST, "localhost:80");

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidHost(_))));

    clear_env();
}

#[test]
#[serial]
fn test_config_debug_flag_values() {
    for (value, expected) in [("1", true), ("YES", true), ("off", false), ("0", false)] {
        clear_env();
        env::set_var(BOOKSHELF_DEBUG, value);

        let config = Config::from_env().unwrap();
        assert_eq!(config.debug, expected, "value: {}", value);
    }

    env::set_var(BOOKSHELF_DEBUG, "maybe");
    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidDebugFlag(_))));

    clear_env();
}

#[test]
#[serial]
fn test_config_blank_database_path_uses_default() {
    clear_env();
    env::set_var(BOOKSHELF_DATABASE_PATH, "  ");

    let config = Config::from_env().unwrap();
    assert_eq!(config.database_path, PathBuf::from("books.db"));

    clear_env();
}

#[test]
fn test_default_log_filter() {
    let mut config = Config::default();
    assert_eq!(config.default_log_filter(), "info");

    config.debug = true;
    assert_eq!(config.default_log_filter(), "debug");
}

#[test]
#[serial]
fn test_config_unset_host_uses_default_constant() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config.host, bookshelf_core::DEFAULT_HOST);
    assert!(config.host.is_loopback());
    assert_eq!(Config::default().host, config.host);
}
