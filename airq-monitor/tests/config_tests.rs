// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_core::AirqError;
use airq_monitor::{MonitorConfig, DEFAULT_LABEL, MAX_PRECISION};
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = MonitorConfig::default();

    assert_eq!(config.interval, Duration::from_secs(1));
    assert_eq!(config.precision, 2);
    assert_eq!(config.label, "Air Quality Index: ");
    assert_eq!(config.label, DEFAULT_LABEL);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_overrides() {
    let config = MonitorConfig::default()
        .with_interval(Duration::from_millis(250))
        .with_precision(4)
        .with_label("AQI=");

    assert_eq!(config.interval, Duration::from_millis(250));
    assert_eq!(config.precision, 4);
    assert_eq!(config.label, "AQI=");
}

#[test]
fn test_validate_rejects_excessive_precision() {
    let config = MonitorConfig::default().with_precision(MAX_PRECISION + 1);

    let err = config.validate().unwrap_err();

    assert!(matches!(err, AirqError::InvalidConfig { .. }));
    assert!(err.to_string().contains("precision 18"));
}

#[test]
fn test_validate_rejects_multiline_label() {
    let config = MonitorConfig::default().with_label("Air\nQuality: ");
    assert!(matches!(
        config.validate(),
        Err(AirqError::InvalidConfig { .. })
    ));
}

#[test]
fn test_zero_interval_and_precision_are_valid() {
    let config = MonitorConfig::default()
        .with_interval(Duration::ZERO)
        .with_precision(0);
    assert!(config.validate().is_ok());
}
