//! Tests for the tortus configuration system.

use std::sync::Mutex;

use tortus_core::config::*;
use tortus_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all TORTUS_ env vars to prevent cross-test contamination.
fn clear_tortus_env_vars() {
    for key in [
        "TORTUS_TEXT_COLUMN",
        "TORTUS_ID_COLUMN",
        "TORTUS_RECORD_COUNT",
        "TORTUS_RANDOMIZE",
        "TORTUS_SEED",
        "TORTUS_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TortusConfig::from_toml("").unwrap();

    assert_eq!(config.session.text_column, "");
    assert_eq!(config.session.id_column, None);
    assert_eq!(config.session.record_count, 10);
    assert!(config.session.randomize);
    assert_eq!(
        config.session.labels,
        vec!["Positive", "Negative", "Neutral"]
    );
    assert_eq!(config.session.seed, None);
    assert!(!config.session.strict_sizing);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[session]
text_column = "reviews"
record_count = 25
labels = ["Spam", "Ham"]

[observability]
log_level = "debug"
"#;
    let config = TortusConfig::from_toml(toml).unwrap();
    assert_eq!(config.session.text_column, "reviews");
    assert_eq!(config.session.record_count, 25);
    assert_eq!(config.session.labels, vec!["Spam", "Ham"]);
    // Non-overridden fields keep defaults
    assert!(config.session.randomize);
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = TortusConfig::from_toml("[session\ntext_column = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn negative_record_count_fails_to_parse() {
    let err = TortusConfig::from_toml("[session]\nrecord_count = -3").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn validation_requires_text_column() {
    let err = SessionConfig::default().validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "session.text_column"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validation_rejects_zero_record_count() {
    let err = SessionConfig::new("text")
        .with_record_count(0)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("session.record_count"));
}

#[test]
fn validation_rejects_bad_label_sets() {
    let empty: Vec<String> = Vec::new();
    assert!(SessionConfig::new("text").with_labels(empty).validate().is_err());
    assert!(SessionConfig::new("text")
        .with_labels(["Yes", "  "])
        .validate()
        .is_err());
    assert!(SessionConfig::new("text")
        .with_labels(["Yes", "yes"])
        .validate()
        .is_err());
    assert!(SessionConfig::new("text")
        .with_labels(["Yes", "No"])
        .validate()
        .is_ok());
}

#[test]
fn validation_rejects_blank_id_column() {
    assert!(SessionConfig::new("text")
        .with_id_column(" ")
        .validate()
        .is_err());
}

#[test]
fn id_header_defaults_to_id() {
    assert_eq!(SessionConfig::new("text").id_header(), "id");
    assert_eq!(
        SessionConfig::new("text").with_id_column("doc_id").id_header(),
        "doc_id"
    );
}

#[test]
fn load_reads_file_then_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tortus_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tortus.toml"),
        "[session]\ntext_column = \"reviews\"\nrecord_count = 5\nrandomize = true\n",
    )
    .unwrap();

    std::env::set_var("TORTUS_RECORD_COUNT", "7");
    std::env::set_var("TORTUS_RANDOMIZE", "false");
    std::env::set_var("TORTUS_SEED", "not-a-number");

    let config = TortusConfig::load(dir.path()).unwrap();
    assert_eq!(config.session.text_column, "reviews");
    assert_eq!(config.session.record_count, 7);
    assert!(!config.session.randomize);
    // Unparsable values are ignored.
    assert_eq!(config.session.seed, None);

    clear_tortus_env_vars();
}

#[test]
fn load_without_file_uses_env_only() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tortus_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("TORTUS_TEXT_COLUMN", "body");
    std::env::set_var("TORTUS_ID_COLUMN", "doc_id");
    std::env::set_var("TORTUS_SEED", "42");
    std::env::set_var("TORTUS_LOG_LEVEL", "warn");

    let config = TortusConfig::load(dir.path()).unwrap();
    assert_eq!(config.session.text_column, "body");
    assert_eq!(config.session.id_column.as_deref(), Some("doc_id"));
    assert_eq!(config.session.seed, Some(42));
    assert_eq!(config.observability.log_level, "warn");

    clear_tortus_env_vars();
}

#[test]
fn load_fails_validation_without_text_column() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tortus_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let err = TortusConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = TortusConfig::default();
    config.session = SessionConfig::new("reviews")
        .with_id_column("review_id")
        .with_seed(9)
        .with_labels(["Spam", "Ham"]);

    let text = config.to_toml().unwrap();
    let parsed = TortusConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}
