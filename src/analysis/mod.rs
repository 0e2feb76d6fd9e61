// Statistics, correlation and heatmap color mapping
pub mod correlation;
pub mod heatmap_color;
pub mod statistics;

// Re-export commonly used types
pub use correlation::{
    AnalysisError, CorrelationMatrix, build_correlation_matrix, compute_ticker_statistics,
    prices_by_symbol,
};
pub use heatmap_color::{correlation_to_color, label_text_color, legend_gradient};
pub use statistics::{Statistics, compute_correlation, compute_statistics};
