// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The sampling loop.
//!
//! # Iteration
//!
//! 1. Stop if the cancellation token fired or the [`StopCondition`] is met
//! 2. Unless this is the first sample, pause for the configured interval; a
//!    cancellation during the pause ends the loop immediately
//! 3. Take a [`Measurement`](airq_core::Measurement) from the sensor
//! 4. Write the formatted line and flush
//!
//! The pause sits between samples, so a run limited to N iterations emits N
//! lines and waits N - 1 times.

use crate::config::MonitorConfig;
use crate::format::format_line;
use crate::sensor::AirQualitySensor;
use crate::source::RandomSource;
use crate::stop::{RunSummary, StopCondition, StopReason};
use airq_core::{CancellationToken, Measurement, Result};
use airq_runtime::Timer;
use core::pin::pin;
use futures::future::{select, Either};
use std::io::Write;

/// Periodically samples a sensor and reports each reading as one text line.
#[derive(Debug)]
pub struct MonitorLoop<S, T> {
    sensor: AirQualitySensor<S>,
    timer: T,
    config: MonitorConfig,
    stop: StopCondition,
    cancel: CancellationToken,
}

impl<S, T> MonitorLoop<S, T>
where
    S: RandomSource,
    T: Timer,
{
    /// Build a loop that runs until cancelled.
    ///
    /// Fails with [`AirqError::InvalidConfig`](airq_core::AirqError::InvalidConfig)
    /// if `config` does not validate.
    pub fn new(sensor: AirQualitySensor<S>, timer: T, config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sensor,
            timer,
            config,
            stop: StopCondition::Never,
            cancel: CancellationToken::new(),
        })
    }

    pub fn with_stop_condition(mut self, stop: StopCondition) -> Self {
        self.stop = stop;
        self
    }

    /// Replace the loop's token, e.g. with one wired to Ctrl-C.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Handle that stops this loop when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the loop, writing one line per sample to `out`.
    ///
    /// Returns once the stop condition is met or the token is cancelled. A
    /// failed write or flush ends the loop with
    /// [`AirqError::Output`](airq_core::AirqError::Output).
    pub async fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<RunSummary> {
        crate::info!(
            "monitor started: interval={:?} precision={} stop={:?}",
            self.config.interval,
            self.config.precision,
            self.stop
        );

        let mut emitted: u64 = 0;
        let reason = loop {
            if self.cancel.is_cancelled() {
                break StopReason::Cancelled;
            }
            if self.stop.is_reached(emitted) {
                break StopReason::IterationLimit;
            }

            if emitted > 0 && !self.pause().await {
                break StopReason::Cancelled;
            }

            let measurement = self.sensor.measure();
            self.emit(out, measurement)?;
            emitted += 1;
        };

        crate::info!("monitor stopped after {} samples: {:?}", emitted, reason);
        Ok(RunSummary { emitted, reason })
    }

    /// Wait one interval. Returns `false` if cancelled while waiting.
    async fn pause(&self) -> bool {
        let sleep = pin!(self.timer.sleep_future(self.config.interval));
        let cancelled = pin!(self.cancel.cancelled());

        match select(sleep, cancelled).await {
            Either::Left(((), _)) => true,
            Either::Right(((), _)) => false,
        }
    }

    fn emit<W: Write + ?Sized>(&self, out: &mut W, measurement: Measurement) -> Result<()> {
        let line = format_line(&self.config.label, measurement, self.config.precision);
        crate::debug!("sample {}", measurement.value());

        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
