use std::collections::HashMap;

use futures::future::join_all;
use itertools::Itertools;
use tokio::time::Instant;

use crate::analysis::{Statistics, compute_statistics};
#[cfg(debug_assertions)]
use crate::config::debug;
use crate::data::source::{FetchError, PriceDataSource};
use crate::domain::PriceSeries;

/// Result of fetching a group of tickers together.
/// Successes and failures are kept side by side; one bad ticker never
/// discards the others.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub series: HashMap<String, PriceSeries>,
    /// One `"symbol: message"` entry per failed ticker, in request order
    pub errors: Vec<String>,
}

impl FetchOutcome {
    /// True when every symbol in `symbols` has data.
    pub fn is_complete(&self, symbols: &[String]) -> bool {
        symbols.iter().all(|s| self.series.contains_key(s))
    }

    pub fn missing<'a>(&self, symbols: &'a [String]) -> Vec<&'a str> {
        symbols
            .iter()
            .filter(|s| !self.series.contains_key(*s))
            .map(String::as_str)
            .collect()
    }

    /// All failures folded into one user-facing warning, if there were any.
    pub fn combined_warning(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(format!(
            "Some stocks failed to load: {}",
            self.errors.iter().join(", ")
        ))
    }
}

/// Fetch `minutes` of data for every symbol at once and wait for all of them.
/// Total latency is bounded by the slowest single fetch.
pub async fn fetch_all<S>(source: &S, symbols: &[String], minutes: usize) -> FetchOutcome
where
    S: PriceDataSource + ?Sized,
{
    let start_time = Instant::now();

    let requests = symbols.iter().map(|symbol| async move {
        let result = source.fetch(symbol, minutes).await;
        #[cfg(debug_assertions)]
        if debug::PRINT_FETCH_PROGRESS {
            log::info!("{} fetch finished (ok: {})", symbol, result.is_ok());
        }
        (symbol, result)
    });
    let results = join_all(requests).await;

    let mut outcome = FetchOutcome::default();
    for (symbol, result) in results {
        match result {
            Ok(series) => {
                outcome.series.insert(symbol.clone(), series);
            }
            Err(e) => {
                log::warn!("Fetch failed for {}: {}", symbol, e);
                outcome.errors.push(format!("{}: {}", symbol, e));
            }
        }
    }

    log::info!(
        "Fetched {}/{} tickers from {} in {:?}",
        outcome.series.len(),
        symbols.len(),
        source.signature(),
        start_time.elapsed()
    );
    outcome
}

/// One ticker's series plus its summary statistics (the single-stock view).
#[derive(Debug, Clone)]
pub struct TickerSeries {
    pub series: PriceSeries,
    pub statistics: Statistics,
}

/// Fetch one ticker and summarise it. An empty response is treated as a failure.
pub async fn fetch_single<S>(
    source: &S,
    symbol: &str,
    minutes: usize,
) -> Result<TickerSeries, FetchError>
where
    S: PriceDataSource + ?Sized,
{
    log::info!("Loading data for {} over {} minutes", symbol, minutes);
    let series = source.fetch(symbol, minutes).await?;
    if series.is_empty() {
        return Err(FetchError::NoData(symbol.to_string()));
    }

    let statistics = compute_statistics(&series.prices());
    log::info!(
        "Calculated statistics for {}: mean {:.2}, std dev {:.2}",
        symbol,
        statistics.mean,
        statistics.std_dev
    );
    Ok(TickerSeries { series, statistics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockPriceSource;
    use std::time::Duration;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn source() -> MockPriceSource {
        MockPriceSource::seeded(7).with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn all_known_tickers_succeed() {
        let wanted = symbols(&["META", "MSFT", "NVDA"]);
        let outcome = fetch_all(&source(), &wanted, 12).await;

        assert!(outcome.is_complete(&wanted));
        assert!(outcome.combined_warning().is_none());
        assert!(outcome.series.values().all(|s| s.len() == 12));
    }

    #[tokio::test]
    async fn partial_failure_keeps_successes() {
        let wanted = symbols(&["META", "BOGUS", "NVDA"]);
        let outcome = fetch_all(&source(), &wanted, 5).await;

        assert_eq!(outcome.series.len(), 2);
        assert!(!outcome.is_complete(&wanted));
        assert_eq!(outcome.missing(&wanted), vec!["BOGUS"]);
        assert_eq!(
            outcome.combined_warning().as_deref(),
            Some("Some stocks failed to load: BOGUS: Invalid stock ticker: BOGUS")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_run_concurrently() {
        let slow = MockPriceSource::seeded(8).with_latency(Duration::from_millis(500));
        let wanted = symbols(&["META", "MSFT", "NVDA", "PYPL"]);
        let start = Instant::now();
        let outcome = fetch_all(&slow, &wanted, 3).await;

        assert!(outcome.is_complete(&wanted));
        // Four sequential fetches would take 2s
        assert!(start.elapsed() < Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn single_fetch_includes_statistics() {
        let view = fetch_single(&source(), "NVDA", 30).await.unwrap();
        assert_eq!(view.series.len(), 30);
        assert_eq!(view.statistics, compute_statistics(&view.series.prices()));
    }

    #[tokio::test]
    async fn single_fetch_rejects_empty_series() {
        let err = fetch_single(&source(), "NVDA", 0).await.unwrap_err();
        assert_eq!(err, FetchError::NoData("NVDA".to_string()));
    }

    #[tokio::test]
    async fn single_fetch_propagates_unknown_ticker() {
        let err = fetch_single(&source(), "UNKNOWN", 10).await.unwrap_err();
        assert!(matches!(err, FetchError::UnknownTicker(_)));
    }
}
