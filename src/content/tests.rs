//! Content domain: tests for tuning parsing and validation.

use super::{parse_tuning, validate_tuning};
use crate::vehicle::VehicleTuning;

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&VehicleTuning::default()).is_empty());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let contents = r#"
        (
            schema_version: 1,
            tuning: (
                max_speed: 20.0,
                boost_drain_rate: 15.0,
            ),
        )
    "#;

    let tuning = parse_tuning(contents, "inline.ron").unwrap();
    let defaults = VehicleTuning::default();

    assert_eq!(tuning.max_speed, 20.0);
    assert_eq!(tuning.boost_drain_rate, 15.0);
    assert_eq!(tuning.acceleration, defaults.acceleration);
    assert_eq!(tuning.flip_window, defaults.flip_window);
}

#[test]
fn test_missing_tuning_block_uses_defaults() {
    let tuning = parse_tuning("(schema_version: 1)", "inline.ron").unwrap();
    assert_eq!(tuning, VehicleTuning::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(schema_version: ", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_rejects_non_positive_max_speed() {
    let tuning = VehicleTuning {
        max_speed: 0.0,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "max_speed");
}

#[test]
fn test_rejects_zero_timestep() {
    let tuning = VehicleTuning {
        fixed_timestep: 0.0,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    assert!(errors.iter().any(|e| e.field == "fixed_timestep"));
}

#[test]
fn test_rejects_negative_rates() {
    let tuning = VehicleTuning {
        acceleration: -1.0,
        boost_drain_rate: -5.0,
        deceleration_airborne: -0.1,
        ..Default::default()
    };

    let fields: Vec<_> = validate_tuning(&tuning).iter().map(|e| e.field).collect();
    assert!(fields.contains(&"acceleration"));
    assert!(fields.contains(&"boost_drain_rate"));
    assert!(fields.contains(&"deceleration_airborne"));
    assert_eq!(fields.len(), 3);
}

#[test]
fn test_default_boost_may_sit_below_capacity() {
    let tuning = VehicleTuning {
        default_boost: 10.0,
        boost_capacity: 100.0,
        ..Default::default()
    };
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_rejects_boost_above_capacity() {
    let tuning = VehicleTuning {
        starting_boost: 150.0,
        ..Default::default()
    };

    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "starting_boost");
    assert_eq!(errors[0].value, 150.0);
}

#[test]
fn test_rejects_massless_body() {
    let tuning = VehicleTuning {
        mass: 0.0,
        angular_inertia: -1.0,
        gravity_scale: -2.0,
        ..Default::default()
    };

    let fields: Vec<_> = validate_tuning(&tuning).iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["mass", "angular_inertia", "gravity_scale"]);
}
