// Price data acquisition
pub mod fetch;
pub mod mock_feed;
pub mod source;

// Re-export commonly used types
pub use fetch::{FetchOutcome, TickerSeries, fetch_all, fetch_single};
pub use mock_feed::MockPriceSource;
pub use source::{FetchError, PriceDataSource};
