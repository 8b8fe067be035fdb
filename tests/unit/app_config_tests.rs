/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use respack::app_config::{Config, LogLevel};
use std::path::PathBuf;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.directories, vec!["res/data", "res/i18n"]);
    assert_eq!(config.source_root, PathBuf::from(".."));
    assert_eq!(config.output_root, PathBuf::from("."));
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that an empty JSON object deserializes to the defaults
#[test]
fn test_config_deserialization_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let config: Config = serde_json::from_str("{}")?;

    assert_eq!(config.directories, vec!["res/data", "res/i18n"]);
    assert_eq!(config.source_root, PathBuf::from(".."));
    assert_eq!(config.output_root, PathBuf::from("."));
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that explicit values in the config file override the defaults
#[test]
fn test_config_deserialization_withExplicitValues_shouldOverrideDefaults() -> Result<()> {
    let content = r#"{
        "directories": ["assets/text"],
        "source_root": "/srv/game",
        "output_root": "build",
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(content)?;

    assert_eq!(config.directories, vec!["assets/text"]);
    assert_eq!(config.source_root, PathBuf::from("/srv/game"));
    assert_eq!(config.output_root, PathBuf::from("build"));
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

/// Test that an unknown log level string is rejected
#[test]
fn test_config_deserialization_withUnknownLogLevel_shouldFail() {
    let content = r#"{ "log_level": "verbose" }"#;

    assert!(serde_json::from_str::<Config>(content).is_err());
}

/// Test loading a configuration file from disk
#[test]
fn test_from_file_withValidFile_shouldLoad() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_file = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "directories": ["res/i18n"] }"#,
    )?;

    let config = Config::from_file(&config_file)?;

    assert_eq!(config.directories, vec!["res/i18n"]);
    Ok(())
}

/// Test that loading a missing configuration file fails
#[test]
fn test_from_file_withMissingFile_shouldFail() {
    assert!(Config::from_file("definitely_missing_conf.json").is_err());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Empty directory list
    config.directories = vec![];
    assert!(config.validate().is_err());

    // Absolute directory entry
    config.directories = vec!["/etc".to_string()];
    assert!(config.validate().is_err());

    // Directory entry escaping the roots
    config.directories = vec!["../outside".to_string()];
    assert!(config.validate().is_err());

    // Relative entries are fine again
    config.directories = vec!["res/data".to_string()];
    assert!(config.validate().is_ok());
}
