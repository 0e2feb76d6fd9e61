use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::heatmap_color::correlation_to_color;
use crate::analysis::statistics::{Statistics, compute_correlation, compute_statistics};
use crate::domain::{PriceSeries, RgbColor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no price series for {0}")]
    MissingSeries(String),

    #[error("series lengths differ: {symbol} has {actual} samples, expected {expected}")]
    LengthMismatch {
        symbol: String,
        expected: usize,
        actual: usize,
    },
}

/// Square matrix of pairwise correlations, rows and columns in `symbols` order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get(row)?.get(col).copied()
    }

    /// Correlation between two symbols by name.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.symbols.iter().position(|s| s == a)?;
        let col = self.symbols.iter().position(|s| s == b)?;
        self.get(row, col)
    }

    /// Heatmap fill color for every cell.
    pub fn cell_colors(&self) -> Vec<Vec<RgbColor>> {
        self.values
            .iter()
            .map(|row| row.iter().map(|&v| correlation_to_color(v)).collect())
            .collect()
    }
}

/// Build the correlation matrix for `order` from per-symbol price sequences.
///
/// Every symbol in `order` must have a series and all those series must share
/// one length. Samples are paired by index, not by timestamp.
pub fn build_correlation_matrix(
    series_by_symbol: &HashMap<String, Vec<f64>>,
    order: &[String],
) -> Result<CorrelationMatrix, AnalysisError> {
    let mut rows: Vec<&[f64]> = Vec::with_capacity(order.len());
    for symbol in order {
        let prices = series_by_symbol
            .get(symbol)
            .ok_or_else(|| AnalysisError::MissingSeries(symbol.clone()))?;
        if let Some(first) = rows.first() {
            if prices.len() != first.len() {
                return Err(AnalysisError::LengthMismatch {
                    symbol: symbol.clone(),
                    expected: first.len(),
                    actual: prices.len(),
                });
            }
        }
        rows.push(prices.as_slice());
    }

    let values = rows
        .iter()
        .map(|a| rows.iter().map(|b| compute_correlation(a, b)).collect())
        .collect();

    Ok(CorrelationMatrix {
        symbols: order.to_vec(),
        values,
    })
}

/// Per-ticker statistics, keyed in symbol order. Tickers are independent so
/// they are computed in parallel.
pub fn compute_ticker_statistics(
    series: &HashMap<String, PriceSeries>,
) -> BTreeMap<String, Statistics> {
    series
        .par_iter()
        .map(|(symbol, s)| (symbol.clone(), compute_statistics(&s.prices())))
        .collect()
}

/// Pull the bare price vectors out of fetched series, keyed by symbol.
pub fn prices_by_symbol(series: &HashMap<String, PriceSeries>) -> HashMap<String, Vec<f64>> {
    series
        .iter()
        .map(|(symbol, s)| (symbol.clone(), s.prices()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sample;
    use chrono::Utc;

    fn order(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn three_tickers() -> HashMap<String, Vec<f64>> {
        HashMap::from([
            ("META".to_string(), vec![300.0, 305.0, 298.0, 310.0, 302.0]),
            ("MSFT".to_string(), vec![350.0, 341.0, 356.0, 349.0, 360.0]),
            ("NVDA".to_string(), vec![600.0, 612.0, 590.0, 625.0, 601.0]),
        ])
    }

    #[test]
    fn three_by_three_symmetric_with_unit_diagonal() {
        let matrix = build_correlation_matrix(&three_tickers(), &order(&["META", "MSFT", "NVDA"]))
            .unwrap();

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.values.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.values[i].len(), 3);
            assert!((matrix.values[i][i] - 1.0).abs() < 1e-12);
            for j in 0..3 {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
    }

    #[test]
    fn rows_follow_caller_order() {
        let data = three_tickers();
        let forward = build_correlation_matrix(&data, &order(&["META", "NVDA"])).unwrap();
        let reversed = build_correlation_matrix(&data, &order(&["NVDA", "META"])).unwrap();

        assert_eq!(reversed.symbols, vec!["NVDA", "META"]);
        assert_eq!(forward.values[0][1], reversed.values[1][0]);
        assert_eq!(
            forward.between("META", "NVDA"),
            Some(compute_correlation(&data["META"], &data["NVDA"]))
        );
    }

    #[test]
    fn missing_symbol_is_an_error() {
        let err = build_correlation_matrix(&three_tickers(), &order(&["META", "TSLA"])).unwrap_err();
        assert_eq!(err, AnalysisError::MissingSeries("TSLA".to_string()));
    }

    #[test]
    fn unequal_lengths_are_rejected() {
        let mut data = three_tickers();
        data.insert("V".to_string(), vec![250.0, 251.0]);
        let err = build_correlation_matrix(&data, &order(&["META", "V"])).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::LengthMismatch {
                expected: 5,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn empty_order_gives_empty_matrix() {
        let matrix = build_correlation_matrix(&three_tickers(), &[]).unwrap();
        assert_eq!(matrix.size(), 0);
        assert!(matrix.values.is_empty());
    }

    #[test]
    fn diagonal_cells_render_red() {
        let matrix = build_correlation_matrix(&three_tickers(), &order(&["META", "MSFT"])).unwrap();
        let colors = matrix.cell_colors();
        assert_eq!(colors[0][0].to_hex(), "#ff0000");
        assert_eq!(colors[1][1].to_hex(), "#ff0000");
    }

    #[test]
    fn statistics_per_ticker() {
        let now = Utc::now();
        let series = HashMap::from([(
            "PYPL".to_string(),
            PriceSeries::new(
                "PYPL",
                vec![Sample::new(1.0, now), Sample::new(3.0, now)],
            ),
        )]);
        let stats = compute_ticker_statistics(&series);
        assert_eq!(stats["PYPL"].mean, 2.0);
        assert!((stats["PYPL"].std_dev - 2f64.sqrt()).abs() < 1e-12);
    }
}
