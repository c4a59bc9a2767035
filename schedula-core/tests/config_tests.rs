// Tests for config loading and saving

use schedula_core::config::Config;
use schedula_core::cycle::LOGOUT_PATH;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_missing_config_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.logout_path, LOGOUT_PATH);
    assert_eq!(config.timeout_secs, Some(10));
}

#[test]
fn test_partial_config_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"base_url": "https://scheduler.example.edu"}"#).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.base_url.as_deref(), Some("https://scheduler.example.edu"));
    assert_eq!(config.logout_path, LOGOUT_PATH);
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "base_url = nope").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn test_save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("schedula").join("config.json");

    let config = Config {
        base_url: Some("http://localhost:8080".to_string()),
        timeout_secs: None,
        user_agent: Some("test-agent".to_string()),
        logout_path: "/logout.php".to_string(),
    };
    config.save(&path).unwrap();

    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_client_options_from_config() {
    let config = Config {
        timeout_secs: None,
        ..Config::default()
    };
    let options = config.client_options();
    assert_eq!(options.timeout, None);
    assert!(options.user_agent.starts_with("Schedula/"));

    let config = Config {
        timeout_secs: Some(3),
        user_agent: Some("custom".to_string()),
        ..Config::default()
    };
    let options = config.client_options();
    assert_eq!(options.timeout, Some(Duration::from_secs(3)));
    assert_eq!(options.user_agent, "custom");
}

#[test]
fn test_expand_path_tilde() {
    let expanded = Config::expand_path("~/.config/schedula/config.json");
    assert!(expanded.ends_with(".config/schedula/config.json"));
}
