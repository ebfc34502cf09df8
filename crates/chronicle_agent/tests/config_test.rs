//! Tests for agent configuration loading.

use chronicle_agent::AgentConfig;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AgentConfig::default();

    assert_eq!(config.model.name, "llama3.2");
    assert_eq!(config.model.base_url, "http://localhost:11434");
    assert_eq!(config.posting_time, "10:00");
    assert!(!config.publisher.mock);
    assert_eq!(
        config.storage.curriculum_path,
        PathBuf::from("data/curriculum.json")
    );
    assert_eq!(config.generation.temperature, 0.8);
    assert_eq!(config.generation.max_tokens, 1024);
    assert_eq!(config.generation.continuity_window, 3);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = AgentConfig::load(temp_dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.posting_time, "10:00");
}

#[test]
fn test_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chronicle.toml");

    std::fs::write(
        &path,
        r#"
posting_time = "18:30"

[model]
name = "mistral"

[generation]
temperature = 0.5
max_tokens = 2048

[publisher]
mock = true

[storage]
history_path = "state/history.json"
"#,
    )
    .unwrap();

    let config = AgentConfig::from_file(&path).unwrap();

    assert_eq!(config.posting_time, "18:30");
    assert_eq!(config.model.name, "mistral");
    // Unset fields fall back to their defaults.
    assert_eq!(config.model.base_url, "http://localhost:11434");
    assert_eq!(config.generation.temperature, 0.5);
    assert_eq!(config.generation.max_tokens, 2048);
    assert_eq!(config.generation.continuity_window, 3);
    assert!(config.publisher.mock);
    assert_eq!(
        config.storage.history_path,
        PathBuf::from("state/history.json")
    );
    assert_eq!(
        config.storage.curriculum_path,
        PathBuf::from("data/curriculum.json")
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("chronicle.toml");
    std::fs::write(&path, "posting_time = [not toml").unwrap();

    assert!(AgentConfig::from_file(&path).is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let config = AgentConfig::default();
    let serialized = toml::to_string(&config).unwrap();
    let parsed: AgentConfig = toml::from_str(&serialized).unwrap();

    assert_eq!(parsed.posting_time, config.posting_time);
    assert_eq!(parsed.model.name, config.model.name);
}
