use rl::{ConfigError, PpoConfig};
use std::fs;

#[test]
fn parse_full_config() {
    let config = PpoConfig::from_path("tests/data/ppo_small.json").unwrap();
    assert_eq!(config.num_workers, 4);
    assert_eq!(config.num_epochs, 10);
    assert_eq!(config.batch_size, 512);
    assert_eq!(config.hidden_layers, vec![64, 32]);
}

#[test]
fn missing_fields_take_defaults() {
    let json = fs::read_to_string("tests/data/ppo_partial.json").unwrap();
    let config = PpoConfig::from_json(&json).unwrap();
    assert_eq!(config.num_workers, 8);
    assert_eq!(
        config,
        PpoConfig {
            num_workers: 8,
            ..PpoConfig::default()
        }
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PpoConfig::from_path("tests/data/ppo_unknown_field.json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("learning_rate"));
}

#[test]
fn missing_file_is_io_error() {
    let err = PpoConfig::from_path("tests/data/does_not_exist.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn out_of_range_values_fail_validation() {
    let err = PpoConfig::from_json(r#"{ "batch_size": 0 }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NotPositive {
            field: "batch_size",
            value: 0
        }
    ));

    let err = PpoConfig::from_json(r#"{ "hidden_layers": [] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoHiddenLayers));
}

#[test]
fn negative_values_do_not_parse() {
    let err = PpoConfig::from_json(r#"{ "num_epochs": -3 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn options_are_flat_and_complete() {
    let options = PpoConfig::default().to_options();
    let mut keys: Vec<&str> = options.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["batch_size", "hidden_layers", "num_epochs", "num_workers"]);
    assert_eq!(options["hidden_layers"], serde_json::json!([256, 256]));
    assert_eq!(options["num_workers"], serde_json::json!(2));
}

#[test]
fn serialized_config_parses_back() {
    let config = PpoConfig {
        hidden_layers: vec![128],
        ..PpoConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(PpoConfig::from_json(&json).unwrap(), config);
}
