// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Monitor loop settings.
//!
//! The binary always runs with [`MonitorConfig::default()`]; the builder methods
//! exist for embedding and tests.

use airq_core::{AirqError, Result};
use std::time::Duration;

/// Pause between consecutive samples.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Fractional digits printed for each measurement.
pub const DEFAULT_PRECISION: usize = 2;

/// Text printed in front of every measurement.
pub const DEFAULT_LABEL: &str = "Air Quality Index: ";

/// Digits beyond this carry no information for an `f64` in `[0, 100]`.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub interval: Duration,
    pub precision: usize,
    pub label: String,
}

impl MonitorConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Check that the settings produce exactly one well-formed line per sample.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(AirqError::invalid_config(format!(
                "precision {} exceeds maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }

        if self.label.contains(['\n', '\r']) {
            return Err(AirqError::invalid_config(
                "label must not contain line breaks",
            ));
        }

        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            precision: DEFAULT_PRECISION,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}
