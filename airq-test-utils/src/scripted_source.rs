// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_monitor::RandomSource;

/// Replays a fixed list of values, cycling when exhausted.
///
/// The requested range is ignored, which lets tests feed out-of-range values to
/// the sensor on purpose.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
    requests: Vec<(f64, f64)>,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        Self {
            values,
            cursor: 0,
            requests: Vec::new(),
        }
    }

    /// Ranges passed to [`RandomSource::next_in_range`], in call order.
    pub fn requests(&self) -> &[(f64, f64)] {
        &self.requests
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        self.requests.push((low, high));
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
