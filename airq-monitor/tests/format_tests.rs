// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_core::Measurement;
use airq_monitor::{format_line, DEFAULT_LABEL};

fn m(value: f64) -> Measurement {
    Measurement::new(value).expect("valid measurement")
}

#[test]
fn test_two_decimal_formatting() {
    assert_eq!(format_line(DEFAULT_LABEL, m(3.0), 2), "Air Quality Index: 3.00");
    assert_eq!(format_line(DEFAULT_LABEL, m(42.17), 2), "Air Quality Index: 42.17");
    assert_eq!(format_line(DEFAULT_LABEL, m(0.0), 2), "Air Quality Index: 0.00");
    assert_eq!(format_line(DEFAULT_LABEL, m(100.0), 2), "Air Quality Index: 100.00");
}

#[test]
fn test_rounding_to_precision() {
    assert_eq!(format_line(DEFAULT_LABEL, m(7.1249), 2), "Air Quality Index: 7.12");
    assert_eq!(format_line(DEFAULT_LABEL, m(99.999), 2), "Air Quality Index: 100.00");
    assert_eq!(format_line(DEFAULT_LABEL, m(12.3456), 3), "Air Quality Index: 12.346");
}

#[test]
fn test_custom_label_and_zero_precision() {
    assert_eq!(format_line("AQI ", m(61.7), 0), "AQI 62");
    assert_eq!(format_line("", m(5.5), 1), "5.5");
}
