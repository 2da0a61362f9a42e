// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Simulated air-quality sensor and its monitor loop.
//!
//! The loop samples an [`AirQualitySensor`], writes one line per sample, and
//! pauses on an injected [`Timer`](airq_runtime::Timer) until its
//! [`StopCondition`] is met or its cancellation token fires.
//!
//! ```
//! use airq_monitor::{format_line, AirQualitySensor, RngSource, DEFAULT_LABEL};
//!
//! let mut sensor = AirQualitySensor::new(RngSource::seeded(7));
//! let line = format_line(DEFAULT_LABEL, sensor.measure(), 2);
//! assert!(line.starts_with("Air Quality Index: "));
//! ```

mod logging;

pub mod config;
pub mod format;
pub mod monitor;
pub mod sensor;
pub mod source;
pub mod stop;

pub use self::config::{
    MonitorConfig, DEFAULT_INTERVAL, DEFAULT_LABEL, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use self::format::format_line;
pub use self::monitor::MonitorLoop;
pub use self::sensor::AirQualitySensor;
pub use self::source::{RandomSource, RngSource};
pub use self::stop::{RunSummary, StopCondition, StopReason};
