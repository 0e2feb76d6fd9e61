//! Plain-text rendering of snapshots for the terminal front end.

use std::collections::BTreeMap;

use colorgrad::GradientBuilderError;

use crate::analysis::heatmap_color::{label_text_color, legend_swatches};
use crate::analysis::{CorrelationMatrix, Statistics, correlation_to_color};
use crate::config::HEATMAP;
use crate::data::TickerSeries;
use crate::domain::TickerRegistry;
use crate::utils::time_utils;

const CELL_WIDTH: usize = 17;

/// Heatmap as a grid: each cell shows the value and its fill / label colors.
pub fn render_matrix(matrix: &CorrelationMatrix, registry: &TickerRegistry) -> String {
    let mut out = format!("{:<8}", "");
    for symbol in &matrix.symbols {
        out.push_str(&format!("{:>width$}", symbol, width = CELL_WIDTH));
    }
    out.push('\n');

    for (symbol, row) in matrix.symbols.iter().zip(&matrix.values) {
        out.push_str(&format!("{:<8}", symbol));
        for &value in row {
            // trailing mark: w = light label text, b = dark
            let text_mark = if label_text_color(value) == HEATMAP.light_label {
                'w'
            } else {
                'b'
            };
            let cell = format!("{:+.2} {} {}", value, correlation_to_color(value), text_mark);
            out.push_str(&format!("{:>width$}", cell, width = CELL_WIDTH));
        }
        if let Some(name) = registry.display_name(symbol) {
            out.push_str(&format!("  {}", name));
        }
        out.push('\n');
    }
    out
}

/// Mean / std dev table in matrix order; tickers without data are listed as missing.
pub fn render_statistics(symbols: &[String], statistics: &BTreeMap<String, Statistics>) -> String {
    symbols
        .iter()
        .map(|symbol| match statistics.get(symbol) {
            Some(stats) => format!(
                "{:<8} Avg: ${:>9.2}  StdDev: ${:>7.2}\n",
                symbol, stats.mean, stats.std_dev
            ),
            None => format!("{:<8} (no data)\n", symbol),
        })
        .collect()
}

pub fn render_legend(steps: usize) -> Result<String, GradientBuilderError> {
    let swatches = legend_swatches(steps)?;
    let mut out = String::from("Legend (-1 .. +1):");
    for (value, color) in swatches {
        out.push_str(&format!(" {:+.1}={}", value, color));
    }
    Ok(out)
}

/// Single-stock view: chronological price points with the mean alongside.
pub fn render_ticker(view: &TickerSeries, registry: &TickerRegistry) -> String {
    let symbol = view.series.symbol.as_str();
    let title = registry.display_name(symbol).unwrap_or(symbol);
    let mut out = format!(
        "{} Stock Price\nAverage: ${:.2}  Std Dev: ${:.2}\n",
        title, view.statistics.mean, view.statistics.std_dev
    );
    if let (Some(oldest), Some(newest)) = (view.series.oldest(), view.series.newest()) {
        out.push_str(&format!(
            "{} samples over {} minutes, {} .. {}\n",
            view.series.len(),
            time_utils::span_minutes(oldest.timestamp, newest.timestamp),
            time_utils::utc_to_string(oldest.timestamp),
            time_utils::utc_to_string(newest.timestamp)
        ));
    }
    for sample in view.series.chronological() {
        out.push_str(&format!(
            "{}  Price: ${:>9.2}  ({:+.2} vs avg)\n",
            time_utils::chart_label(sample.timestamp),
            sample.price,
            sample.price - view.statistics.mean
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_correlation_matrix;
    use std::collections::HashMap;

    #[test]
    fn matrix_rows_carry_colors_and_names() {
        let data = HashMap::from([
            ("META".to_string(), vec![1.0, 2.0, 3.0]),
            ("NVDA".to_string(), vec![3.0, 2.0, 1.0]),
        ]);
        let order = vec!["META".to_string(), "NVDA".to_string()];
        let matrix = build_correlation_matrix(&data, &order).unwrap();

        let text = render_matrix(&matrix, &TickerRegistry::default());
        assert!(text.contains("+1.00 #ff0000 w"));
        assert!(text.contains("-1.00 #0000ff"));
        assert!(text.contains("Nvidia Corporation"));
    }

    #[test]
    fn statistics_mark_missing_tickers() {
        let stats = BTreeMap::from([(
            "V".to_string(),
            Statistics {
                mean: 250.0,
                std_dev: 4.5,
            },
        )]);
        let text = render_statistics(&["V".to_string(), "TSLA".to_string()], &stats);
        assert!(text.contains("Avg: $   250.00"));
        assert!(text.contains("TSLA     (no data)"));
    }

    #[test]
    fn legend_lists_every_swatch() {
        let legend = render_legend(5).unwrap();
        assert_eq!(legend.matches('#').count(), 5);
    }
}
