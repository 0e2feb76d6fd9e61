// Domain types and value objects
pub mod color;
pub mod sample;
pub mod ticker;

// Re-export commonly used types
pub use color::RgbColor;
pub use sample::{PriceSeries, Sample};
pub use ticker::TickerRegistry;
