//! Summary statistics and pairwise correlation over price sequences.
//!
//! Every function here is total: degenerate input (empty, single sample,
//! length mismatch, zero variance) produces a fixed fallback value rather
//! than an error or a non-finite number.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    /// Sample standard deviation (divisor n - 1)
    pub std_dev: f64,
}

fn mean(prices: &[f64]) -> f64 {
    prices.iter().sum::<f64>() / prices.len() as f64
}

/// Mean and sample standard deviation of `prices`.
///
/// Empty input gives `{0, 0}`. A single price gives that price as the mean and
/// a standard deviation of 0.
pub fn compute_statistics(prices: &[f64]) -> Statistics {
    if prices.is_empty() {
        return Statistics::default();
    }

    let mean = mean(prices);
    if prices.len() < 2 {
        return Statistics { mean, std_dev: 0.0 };
    }

    let sum_sq_dev: f64 = prices
        .iter()
        .map(|&p| {
            let diff = p - mean;
            diff * diff
        })
        .sum();
    let variance = sum_sq_dev / (prices.len() - 1) as f64;

    Statistics {
        mean,
        std_dev: variance.sqrt(),
    }
}

/// Pearson correlation of two equal-length price sequences, in [-1, 1].
///
/// Returns 0.0 when the lengths differ, when fewer than two samples are given,
/// or when either sequence is constant.
pub fn compute_correlation(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.len() < 2 {
        return 0.0;
    }

    let stats_a = compute_statistics(a);
    let stats_b = compute_statistics(b);

    let denominator = stats_a.std_dev * stats_b.std_dev;
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }

    let covariance = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x - stats_a.mean) * (y - stats_b.mean))
        .sum::<f64>()
        / (a.len() - 1) as f64;

    // Rounding can push |r| a hair past 1 for (near) identical series
    (covariance / denominator).clamp(-1.0, 1.0)
}
