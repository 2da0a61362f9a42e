// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `airq`: print a simulated air-quality index every second until interrupted.

use airq::prelude::*;
use airq::telemetry;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init();

    match run().await {
        Ok(summary) => {
            info!("exiting after {} samples", summary.emitted);
            ExitCode::SUCCESS
        }
        // Downstream reader went away (`airq | head -n 3`): a normal way to stop
        Err(err) if err.is_broken_pipe() => {
            info!("output closed, stopping");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("monitor failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> airq::Result<airq::RunSummary> {
    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let sensor = AirQualitySensor::new(RngSource::thread());
    let mut monitor =
        MonitorLoop::new(sensor, TokioTimer, MonitorConfig::default())?.with_cancellation(cancel);

    let mut stdout = std::io::stdout().lock();
    let summary = monitor.run(&mut stdout).await?;
    Ok(summary)
}

/// Cancel `cancel` on the first Ctrl-C.
fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("interrupt received, stopping");
                cancel.cancel();
            }
            Err(err) => error!("cannot listen for Ctrl-C: {err}"),
        }
    });
}
