// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_runtime::{Timer, TokioTimer};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_sleep_future_advances_clock_by_duration() {
    // Arrange
    let timer = TokioTimer;
    let start = timer.now();

    // Act
    timer.sleep_future(Duration::from_secs(1)).await;

    // Assert
    let elapsed = timer.now() - start;
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_millis(1_005));
}

#[tokio::test(start_paused = true)]
async fn test_zero_duration_sleep_completes() {
    let timer = TokioTimer;
    let start = timer.now();

    timer.sleep_future(Duration::ZERO).await;

    assert!(timer.now() - start < Duration::from_millis(1));
}

#[tokio::test]
async fn test_sleep_future_waits_real_time() {
    let timer = TokioTimer;
    let start = std::time::Instant::now();

    timer.sleep_future(Duration::from_millis(20)).await;

    assert!(start.elapsed() >= Duration::from_millis(20));
}
