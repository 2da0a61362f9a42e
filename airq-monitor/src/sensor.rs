// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::source::RandomSource;
use airq_core::Measurement;

/// Simulated air-quality sensor.
///
/// Each call to [`measure`](Self::measure) draws an independent value from the
/// injected [`RandomSource`], uniformly over `[0, 100]`.
#[derive(Debug, Clone)]
pub struct AirQualitySensor<S> {
    source: S,
}

impl<S: RandomSource> AirQualitySensor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Take one reading. Never fails.
    ///
    /// A source that strays outside `[0, 100]` is clamped back into range.
    pub fn measure(&mut self) -> Measurement {
        let raw = self
            .source
            .next_in_range(Measurement::MIN, Measurement::MAX);

        if !Measurement::contains(raw) {
            crate::warn!("random source produced {} outside [0, 100]; clamping", raw);
        }

        Measurement::clamped(raw)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
