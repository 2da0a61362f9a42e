// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! When the monitor loop ends.

/// Rule checked by the monitor loop before each sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopCondition {
    /// Run until cancelled.
    #[default]
    Never,
    /// Stop once this many lines have been emitted.
    AfterIterations(u64),
}

impl StopCondition {
    pub fn is_reached(self, emitted: u64) -> bool {
        match self {
            Self::Never => false,
            Self::AfterIterations(limit) => emitted >= limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The configured iteration limit was reached.
    IterationLimit,
    /// The cancellation token fired.
    Cancelled,
}

/// Outcome of a completed [`MonitorLoop::run`](crate::MonitorLoop::run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub emitted: u64,
    pub reason: StopReason,
}
