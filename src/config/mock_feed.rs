//! Mock price feed configuration.

pub struct MockFeedConfig {
    /// Simulated network latency per fetch (milliseconds)
    pub latency_ms: u64,
    /// Full width of the uniform price band as a fraction of the base price.
    /// 0.10 means each price lands within +/-5% of base.
    pub variance_pct: f64,
}

pub const MOCK_FEED: MockFeedConfig = MockFeedConfig {
    latency_ms: 500,
    variance_pct: 0.10,
};
