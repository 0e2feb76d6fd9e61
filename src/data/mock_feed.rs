//! Mock feed: each sample is an independent uniform draw around the
//! ticker's base price.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{MOCK_FEED, MockFeedConfig};
use crate::data::source::{FetchError, PriceDataSource};
use crate::domain::{PriceSeries, Sample, TickerRegistry};

pub struct MockPriceSource {
    registry: TickerRegistry,
    latency: Duration,
    variance_pct: f64,
    rng: Mutex<StdRng>,
}

impl MockPriceSource {
    /// Default registry and feed settings, entropy-seeded.
    pub fn new() -> Self {
        Self::with_config(TickerRegistry::default(), &MOCK_FEED, StdRng::from_entropy())
    }

    /// Reproducible output for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(
            TickerRegistry::default(),
            &MOCK_FEED,
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn with_config(registry: TickerRegistry, config: &MockFeedConfig, rng: StdRng) -> Self {
        Self {
            registry,
            latency: Duration::from_millis(config.latency_ms),
            variance_pct: config.variance_pct,
            rng: Mutex::new(rng),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn generate_series(
        &self,
        symbol: &str,
        base_price: f64,
        minutes: usize,
        called_at: DateTime<Utc>,
    ) -> PriceSeries {
        let spread = base_price * self.variance_pct;
        // Poisoning only means another fetch panicked mid-draw; the RNG state is still usable
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        let samples = (0..minutes)
            .map(|i| {
                let price = base_price + rng.gen_range(-0.5..0.5) * spread;
                Sample::new(price, called_at - TimeDelta::minutes(i as i64))
            })
            .collect();

        PriceSeries::new(symbol, samples)
    }
}

impl Default for MockPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceDataSource for MockPriceSource {
    fn signature(&self) -> &'static str {
        "Mock Price Feed"
    }

    async fn fetch(&self, symbol: &str, minutes: usize) -> Result<PriceSeries, FetchError> {
        // Sample 0 is stamped with the request time, not the time the response lands
        let called_at = Utc::now();
        log::info!("Generating mock data for {}, minutes: {}", symbol, minutes);
        // Simulate network delay
        tokio::time::sleep(self.latency).await;

        let Some(base_price) = self.registry.base_price(symbol) else {
            log::error!("Error generating mock data for {}: unknown ticker", symbol);
            return Err(FetchError::UnknownTicker(symbol.to_string()));
        };

        Ok(self.generate_series(symbol, base_price, minutes, called_at))
    }
}
