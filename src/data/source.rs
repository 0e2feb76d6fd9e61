use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PriceSeries;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Invalid stock ticker: {0}")]
    UnknownTicker(String),

    #[error("No data received for {0}")]
    NoData(String),
}

/// Anything that can hand back recent prices for a ticker.
///
/// Implementations return exactly `minutes` samples, newest first, one minute
/// apart, with sample 0 taken at the time of the call.
#[async_trait]
pub trait PriceDataSource: Send + Sync {
    async fn fetch(&self, symbol: &str, minutes: usize) -> Result<PriceSeries, FetchError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}
