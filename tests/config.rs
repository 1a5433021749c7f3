use chronokit::config::Config;
use chronokit::DateTimePattern;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.patterns.default_date, DateTimePattern::LongDate);
    assert_eq!(config.patterns.default_date_time, DateTimePattern::LongDateTime);
    assert!(config.patterns.overrides.is_empty());
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // A date default with time fields should fail
    config.patterns.default_date = DateTimePattern::LongDateTimeMinute;
    assert!(config.validate().is_err());

    // Reset and test an invalid override template
    config.patterns.default_date = DateTimePattern::LongDate;
    config
        .patterns
        .overrides
        .insert("long-date".to_string(), "yyyy-MMM".to_string());
    assert!(config.validate().is_err());

    // Reset and test an unknown override key
    config.patterns.overrides.clear();
    config
        .patterns
        .overrides
        .insert("iso-week".to_string(), "yyyy".to_string());
    assert!(config.validate().is_err());

    // Reset and test an invalid log level
    config.patterns.overrides.clear();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_date = \"long-date\""));
    assert!(toml_str.contains("default_date_time = \"long-date-time\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[patterns]
default_date = "en-date"

[patterns.overrides]
en-date = "dd/MM/yyyy"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.patterns.default_date, DateTimePattern::EnDate);
    assert_eq!(config.patterns.date_layout().unwrap().strftime(), "%d/%m/%Y");

    // Check that unspecified values use defaults
    assert_eq!(config.patterns.default_date_time, DateTimePattern::LongDateTime);
    assert_eq!(
        config.patterns.date_time_layout().unwrap().template(),
        "yyyy-MM-dd HH:mm:ss.SSS"
    );
    assert!(!config.logging.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[patterns]
default_date_time = "short-date-time-second"

[logging]
enabled = true
level = "debug"
"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.patterns.default_date_time, DateTimePattern::ShortDateTimeSecond);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);
}

#[test]
fn test_load_from_file_rejects_bad_template() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[patterns.overrides]\nlong-date = \"yyyy-MM-dd Q\"").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, Config::default());
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# chronokit configuration file"));
}

#[test]
fn test_invalid_config_error_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

    let err = Config::load_from_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains(&file.path().display().to_string()), "{}", message);
    assert!(message.contains("Invalid log level"), "{}", message);
}
