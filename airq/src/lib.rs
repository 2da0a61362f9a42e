// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # airq
//!
//! A simulated air-quality poller. Every interval it draws a random index in
//! `[0, 100]` and prints it:
//!
//! ```text
//! Air Quality Index: 42.17
//! ```
//!
//! ## Building blocks
//!
//! - [`AirQualitySensor`] draws readings from an injected [`RandomSource`]
//! - [`MonitorLoop`] formats and writes them, pausing on an injected [`Timer`]
//! - [`StopCondition`] and [`CancellationToken`] end the loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use airq::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let sensor = AirQualitySensor::new(RngSource::thread());
//!     let mut monitor = MonitorLoop::new(sensor, TokioTimer, MonitorConfig::default())?
//!         .with_stop_condition(StopCondition::AfterIterations(3));
//!
//!     monitor.run(&mut std::io::stdout().lock()).await?;
//!     Ok(())
//! }
//! ```

pub mod telemetry;

pub use airq_core::{AirqError, CancellationToken, Measurement, Result};
pub use airq_monitor::{
    format_line, AirQualitySensor, MonitorConfig, MonitorLoop, RandomSource, RngSource,
    RunSummary, StopCondition, StopReason,
};
pub use airq_runtime::Timer;

#[cfg(feature = "runtime-tokio")]
pub use airq_runtime::TokioTimer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use airq_core::{CancellationToken, Measurement};
    pub use airq_monitor::{
        AirQualitySensor, MonitorConfig, MonitorLoop, RandomSource, RngSource, StopCondition,
        StopReason,
    };
    pub use airq_runtime::Timer;

    #[cfg(feature = "runtime-tokio")]
    pub use airq_runtime::TokioTimer;
}
