//! Configuration module for the stock heatmap.

pub mod debug;
pub mod heatmap;
pub mod mock_feed;
pub mod tickers;
pub mod window;

// Re-export commonly used items
pub use heatmap::{HEATMAP, HeatmapConfig};
pub use mock_feed::{MOCK_FEED, MockFeedConfig};
pub use tickers::{TICKERS, TickerEntry};
pub use window::{WINDOW, WindowConfig};
