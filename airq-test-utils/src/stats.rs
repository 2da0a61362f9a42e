// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Statistics for checking the sensor's distribution.

/// Upper 0.1% critical value of the chi-squared distribution with 9 degrees of
/// freedom (10 bins).
pub const CHI_SQUARED_10_BINS_P001: f64 = 27.877;

/// Pearson chi-squared statistic of `samples` against Uniform[`low`, `high`]
/// split into `bins` equal-width bins.
pub fn chi_squared_uniform(samples: &[f64], bins: usize, low: f64, high: f64) -> f64 {
    let mut counts = vec![0usize; bins];
    let width = (high - low) / bins as f64;
    for &sample in samples {
        // high itself falls in the last bin
        let index = (((sample - low) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let expected = samples.len() as f64 / bins as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Lag-1 sample autocorrelation. Near zero for independent draws.
pub fn lag_one_correlation(samples: &[f64]) -> f64 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    if variance == 0.0 {
        return 0.0;
    }

    let covariance: f64 = samples
        .windows(2)
        .map(|pair| (pair[0] - mean) * (pair[1] - mean))
        .sum();
    covariance / variance
}
