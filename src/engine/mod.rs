pub mod core;
pub mod messages;
pub mod state;

// Re-export key components
pub use self::core::HeatmapEngine;
pub use messages::{CycleResult, FetchCycle};
pub use state::HeatmapSnapshot;
