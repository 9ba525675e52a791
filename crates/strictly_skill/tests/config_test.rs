//! Tests for skill configuration loading.

use std::fs;
use tempfile::TempDir;

use strictly_skill::{DEFAULT_APPLICATION_ID, SkillConfig};

#[test]
fn test_default_uses_built_in_application_id() {
    assert_eq!(SkillConfig::default().application_id(), DEFAULT_APPLICATION_ID);
}

#[test]
fn test_from_file_reads_application_id() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("skill.toml");
    fs::write(&path, r#"application_id = "amzn1.ask.skill.from-file""#).expect("Write failed");

    let config = SkillConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.application_id(), "amzn1.ask.skill.from-file");
}

#[test]
fn test_from_file_defaults_missing_key() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("skill.toml");
    fs::write(&path, "# nothing configured\n").expect("Write failed");

    let config = SkillConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, SkillConfig::default());
}

#[test]
fn test_from_file_rejects_empty_application_id() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("skill.toml");
    fs::write(&path, r#"application_id = "  ""#).expect("Write failed");

    let err = SkillConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("must not be empty"));
}

#[test]
fn test_from_file_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = SkillConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_from_file_invalid_toml() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("skill.toml");
    fs::write(&path, "application_id = [not toml").expect("Write failed");

    let err = SkillConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_load_prefers_explicit_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("skill.toml");
    fs::write(&path, r#"application_id = "amzn1.ask.skill.explicit""#).expect("Write failed");

    let config = SkillConfig::load(Some(path.as_path())).expect("Load failed");
    assert_eq!(config.application_id(), "amzn1.ask.skill.explicit");
}
