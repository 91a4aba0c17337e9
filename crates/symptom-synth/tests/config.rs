use serde_json::json;
use symptom_synth::config::CURRENT_VERSION;
use symptom_synth::{GenerationConfig, SynthError};

#[test]
fn defaults_match_reference_run() {
    let config = GenerationConfig::default();
    assert_eq!(config.seed, 42);
    assert_eq!(config.row_count, 5200);
    assert_eq!(config.min_valid_rows, 5000);
    assert_eq!(config.noise_probability, 0.10);
    assert!(config.validate().is_ok());
}

#[test]
fn unversioned_config_is_migrated() {
    let config = GenerationConfig::from_json(json!({
        "seed": 7,
        "row_count": 10,
        "created_at": "2026-03-04"
    }))
    .unwrap();

    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.seed, 7);
    assert_eq!(config.row_count, 10);
    assert_eq!(config.min_valid_rows, 5000);
    assert_eq!(config.created_at, Some(jiff::civil::date(2026, 3, 4)));
}

#[test]
fn newer_config_is_rejected() {
    let err = GenerationConfig::from_json(json!({ "config_version": 99 })).unwrap_err();
    assert!(matches!(err, SynthError::InvalidConfig(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let err = GenerationConfig::from_json(json!({ "noise_probability": -0.1 })).unwrap_err();
    assert!(matches!(err, SynthError::InvalidConfig(_)));

    let err = GenerationConfig::from_json(json!({ "row_count": 0 })).unwrap_err();
    assert!(matches!(err, SynthError::InvalidConfig(_)));
}

#[test]
fn non_object_config_is_rejected() {
    let err = GenerationConfig::from_json(json!([1, 2, 3])).unwrap_err();
    assert!(matches!(err, SynthError::InvalidConfig(_)));
}

#[test]
fn oversized_version_is_rejected() {
    let err = GenerationConfig::from_json(json!({ "config_version": 4294967296u64 })).unwrap_err();
    assert!(matches!(err, SynthError::InvalidConfig(_)));

    let err = GenerationConfig::from_json(json!({ "config_version": "1" })).unwrap_err();
    assert!(matches!(err, SynthError::InvalidConfig(_)));
}
