use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observed price. Immutable once produced by a data source.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn new(price: f64, timestamp: DateTime<Utc>) -> Self {
        Sample { price, timestamp }
    }
}

/// All samples for one ticker over one query window.
/// Samples are stored newest first, as the feed produces them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    pub samples: Vec<Sample>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            symbol: symbol.into(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Prices in stored (newest first) order. This is what the statistics and
    /// correlation functions consume.
    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price).collect()
    }

    /// Samples oldest first, ready for a left-to-right time axis.
    pub fn chronological(&self) -> Vec<Sample> {
        let mut samples = self.samples.clone();
        samples.sort_by_key(|s| s.timestamp);
        samples
    }

    pub fn newest(&self) -> Option<&Sample> {
        self.samples.iter().max_by_key(|s| s.timestamp)
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.iter().min_by_key(|s| s.timestamp)
    }
}
