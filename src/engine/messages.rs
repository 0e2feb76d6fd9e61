use std::sync::Arc;

use crate::data::{FetchOutcome, PriceDataSource, fetch_all};

/// A request to fetch every ticker once. Carries everything it needs, so it
/// can be run without borrowing the engine.
#[derive(Clone)]
pub struct FetchCycle {
    pub cycle_id: u64,
    pub minutes: usize,
    pub symbols: Vec<String>,
    pub source: Arc<dyn PriceDataSource>,
}

impl FetchCycle {
    pub async fn run(self) -> CycleResult {
        let outcome = fetch_all(self.source.as_ref(), &self.symbols, self.minutes).await;
        CycleResult {
            cycle_id: self.cycle_id,
            minutes: self.minutes,
            symbols: self.symbols,
            outcome,
        }
    }
}

impl std::fmt::Debug for FetchCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchCycle")
            .field("cycle_id", &self.cycle_id)
            .field("minutes", &self.minutes)
            .field("symbols", &self.symbols)
            .field("source", &self.source.signature())
            .finish()
    }
}

/// What a finished cycle hands back to the engine.
#[derive(Debug, Clone)]
pub struct CycleResult {
    pub cycle_id: u64,
    pub minutes: usize,
    pub symbols: Vec<String>,
    pub outcome: FetchOutcome,
}
