use std::sync::Arc;

use anyhow::Result;

#[cfg(debug_assertions)]
use crate::config::debug;
use crate::config::WINDOW;
use crate::data::{FetchError, PriceDataSource, TickerSeries, fetch_single};
use crate::domain::TickerRegistry;

use super::messages::{CycleResult, FetchCycle};
use super::state::HeatmapSnapshot;

/// Component-local state for the heatmap and single-stock views.
///
/// Holds the user's current selections and the latest published snapshot.
/// The numeric work itself stays in the stateless `analysis` functions.
pub struct HeatmapEngine {
    source: Arc<dyn PriceDataSource>,
    registry: TickerRegistry,

    /// The Live Selection State
    minutes: usize,
    selected_symbol: String,

    /// Id of the most recently issued cycle. Only its result may be published.
    latest_cycle_id: u64,

    /// THE FRONT BUFFER. Replaced wholesale when a fresh cycle lands.
    snapshot: Option<Arc<HeatmapSnapshot>>,
}

impl HeatmapEngine {
    pub fn new(source: Arc<dyn PriceDataSource>) -> Self {
        Self::with_registry(source, TickerRegistry::default())
    }

    pub fn with_registry(source: Arc<dyn PriceDataSource>, registry: TickerRegistry) -> Self {
        Self {
            source,
            registry,
            minutes: WINDOW.default_minutes,
            selected_symbol: WINDOW.default_symbol.to_string(),
            latest_cycle_id: 0,
            snapshot: None,
        }
    }

    // --- SELECTION ---

    pub fn minutes(&self) -> usize {
        self.minutes
    }

    /// Set the query window, clamped to the slider range. Returns the applied value.
    pub fn set_minutes(&mut self, minutes: usize) -> usize {
        self.minutes = WINDOW.clamp_minutes(minutes);
        self.minutes
    }

    pub fn selected_symbol(&self) -> &str {
        &self.selected_symbol
    }

    pub fn select_ticker(&mut self, symbol: &str) -> Result<(), FetchError> {
        if !self.registry.contains(symbol) {
            return Err(FetchError::UnknownTicker(symbol.to_string()));
        }
        self.selected_symbol = symbol.to_string();
        Ok(())
    }

    pub fn registry(&self) -> &TickerRegistry {
        &self.registry
    }

    /// Accessor for UI
    pub fn snapshot(&self) -> Option<Arc<HeatmapSnapshot>> {
        self.snapshot.clone()
    }

    // --- FETCH CYCLES ---

    /// Issue a new cycle for all registry tickers. Any cycle issued earlier
    /// becomes stale from this point on.
    pub fn begin_cycle(&mut self) -> FetchCycle {
        self.latest_cycle_id += 1;
        #[cfg(debug_assertions)]
        if debug::PRINT_CYCLE_EVENTS {
            log::info!(
                "Issuing fetch cycle {} ({} minutes)",
                self.latest_cycle_id,
                self.minutes
            );
        }
        FetchCycle {
            cycle_id: self.latest_cycle_id,
            minutes: self.minutes,
            symbols: self.registry.symbols(),
            source: self.source.clone(),
        }
    }

    /// Publish a finished cycle. Results from anything but the latest issued
    /// cycle are dropped and `None` is returned.
    pub fn apply(&mut self, result: CycleResult) -> Option<Arc<HeatmapSnapshot>> {
        if result.cycle_id != self.latest_cycle_id {
            #[cfg(debug_assertions)]
            if debug::PRINT_CYCLE_EVENTS {
                log::info!(
                    "Discarding stale cycle {} (latest is {})",
                    result.cycle_id,
                    self.latest_cycle_id
                );
            }
            return None;
        }
        Some(self.publish(result))
    }

    fn publish(&mut self, result: CycleResult) -> Arc<HeatmapSnapshot> {
        let snapshot = HeatmapSnapshot::from_cycle(result);
        for warning in &snapshot.warnings {
            log::warn!("{}", warning);
        }
        #[cfg(debug_assertions)]
        if debug::PRINT_MATRIX {
            if let Some(matrix) = &snapshot.matrix {
                log::info!("Correlation matrix {:?}: {:?}", matrix.symbols, matrix.values);
            }
        }

        // THIS IS THE SWAP.
        let snapshot = Arc::new(snapshot);
        self.snapshot = Some(snapshot.clone());
        snapshot
    }

    /// Run a full cycle with the current selection and publish it.
    /// `&mut self` is held across the fetch, so this cycle is always the latest.
    pub async fn refresh(&mut self) -> Arc<HeatmapSnapshot> {
        let result = self.begin_cycle().run().await;
        self.publish(result)
    }

    /// Load the currently selected ticker for the single-stock view.
    pub async fn load_selected(&self) -> Result<TickerSeries> {
        let view = fetch_single(self.source.as_ref(), &self.selected_symbol, self.minutes).await?;
        Ok(view)
    }
}
