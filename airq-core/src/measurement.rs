// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated air-quality reading.

use crate::error::{AirqError, Result};
use core::fmt;

/// A single air-quality-index value in the closed range `[0, 100]`.
///
/// Measurements carry no identity and no relation to earlier readings. They are
/// created once per monitor iteration, formatted, and dropped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Measurement(f64);

impl Measurement {
    /// Lowest possible index.
    pub const MIN: f64 = 0.0;
    /// Highest possible index.
    pub const MAX: f64 = 100.0;

    /// Create a measurement, rejecting NaN, infinities and values outside `[MIN, MAX]`.
    ///
    /// # Example
    ///
    /// ```
    /// use airq_core::Measurement;
    ///
    /// assert_eq!(Measurement::new(42.5).unwrap().value(), 42.5);
    /// assert!(Measurement::new(100.5).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self> {
        if Self::contains(value) {
            Ok(Self(value))
        } else {
            Err(AirqError::OutOfRange { value })
        }
    }

    /// Create a measurement by saturating `value` into `[MIN, MAX]`.
    ///
    /// NaN has no meaningful position in the range and maps to `MIN`.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(Self::MIN)
        } else {
            Self(value.clamp(Self::MIN, Self::MAX))
        }
    }

    /// Whether `value` is a valid index.
    pub fn contains(value: f64) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Measurement {
    type Error = AirqError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Measurement> for f64 {
    fn from(measurement: Measurement) -> Self {
        measurement.0
    }
}

impl fmt::Display for Measurement {
    /// Honors the formatter's precision, so `format!("{:.2}", m)` renders two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
