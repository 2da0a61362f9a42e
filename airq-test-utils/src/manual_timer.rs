// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_runtime::Timer;
use core::future::{ready, Ready};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Virtual clock for tests.
///
/// Time is a [`Duration`] since the timer was created. Requesting a sleep
/// advances that time at once and records the request, so a loop driven by this
/// timer runs without real waiting.
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    now: Duration,
    sleeps: Vec<Duration>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sleep requested so far, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.lock().sleeps.clone()
    }
}

impl Timer for ManualTimer {
    type Sleep = Ready<()>;

    type Instant = Duration;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        let mut state = self.state.lock();
        state.now += duration;
        state.sleeps.push(duration);
        ready(())
    }

    fn now(&self) -> Self::Instant {
        self.state.lock().now
    }
}
