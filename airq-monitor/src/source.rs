// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Randomness injected into the sensor.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed floating-point values.
pub trait RandomSource {
    /// Next value drawn uniformly from the closed interval `[low, high]`.
    ///
    /// Callers must pass `low <= high`.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        (**self).next_in_range(low, high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        (**self).next_in_range(low, high)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// The process-wide, OS-seeded generator. Used by the `airq` binary.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic generator: equal seeds produce equal sequences on every platform.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_range(low..=high)
    }
}
