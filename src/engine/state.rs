use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::{
    CorrelationMatrix, Statistics, build_correlation_matrix, compute_ticker_statistics,
    prices_by_symbol,
};
use crate::domain::PriceSeries;
use crate::engine::messages::CycleResult;

/// Everything the presentation layer needs from one completed fetch cycle.
#[derive(Serialize, Debug, Clone)]
pub struct HeatmapSnapshot {
    pub cycle_id: u64,
    pub minutes: usize,
    /// Row/column order of the matrix
    pub symbols: Vec<String>,
    /// Ordered maps so serialized snapshots diff cleanly between runs
    pub series: BTreeMap<String, PriceSeries>,
    /// Only tickers that loaded
    pub statistics: BTreeMap<String, Statistics>,
    /// Present only when every ticker loaded
    pub matrix: Option<CorrelationMatrix>,
    pub warnings: Vec<String>,
}

impl HeatmapSnapshot {
    pub fn from_cycle(result: CycleResult) -> Self {
        let CycleResult {
            cycle_id,
            minutes,
            symbols,
            outcome,
        } = result;

        let mut warnings: Vec<String> = outcome.combined_warning().into_iter().collect();
        let statistics = compute_ticker_statistics(&outcome.series);

        // A matrix over a partial set would be misleading, so skip it entirely
        let matrix = if outcome.is_complete(&symbols) {
            match build_correlation_matrix(&prices_by_symbol(&outcome.series), &symbols) {
                Ok(matrix) => Some(matrix),
                Err(e) => {
                    log::error!("Correlation matrix failed for cycle {}: {}", cycle_id, e);
                    warnings.push(e.to_string());
                    None
                }
            }
        } else {
            log::warn!(
                "Skipping correlation matrix for cycle {}: missing {:?}",
                cycle_id,
                outcome.missing(&symbols)
            );
            None
        };

        Self {
            cycle_id,
            minutes,
            symbols,
            series: outcome.series.into_iter().collect(),
            statistics,
            matrix,
            warnings,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
