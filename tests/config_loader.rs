use lexicon_manager::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

/// Default config carries the application identity and file locations.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.application.name, "Lexicon Manager");
    assert_eq!(config.application.version, env!("CARGO_PKG_VERSION"));
    assert!(config.store.path.ends_with("lexicon-manager/lexicon.json"));
    assert!(config.logging.dir.ends_with("lexicon-manager/logs"));
    assert_eq!(config.logging.file_prefix, "LegacyLexicon");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("lexicon-manager/config.toml"));
}

#[test]
fn test_title_prefix_format() {
    let mut config = Config::default();
    config.application.version = "2019.1".to_string();
    assert_eq!(
        config.application.title_prefix(),
        "Lexicon Manager 2019.1 - "
    );
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

/// Missing file falls back to defaults instead of failing startup.
#[test]
fn test_missing_file_returns_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"[application]
version = "2019.1"

[store]
path = "/srv/lexicon/words.json"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.application.name, "Lexicon Manager");
    assert_eq!(config.application.version, "2019.1");
    assert_eq!(
        config.store.path,
        std::path::PathBuf::from("/srv/lexicon/words.json")
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[application\nname = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_log_level_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("loud")),
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_empty_application_name_fails_validation() {
    let mut config = Config::default();
    config.application.name = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_log_level_is_case_insensitive() {
    let mut config = Config::default();
    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}
