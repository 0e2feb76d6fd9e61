//! Query window configuration (the "minutes" slider and default selection)

pub struct WindowConfig {
    pub min_minutes: usize,
    pub max_minutes: usize,
    pub default_minutes: usize,
    /// Ticker shown on the single-stock view at startup
    pub default_symbol: &'static str,
}

impl WindowConfig {
    /// Pull a requested window back into the slider's range.
    pub fn clamp_minutes(&self, minutes: usize) -> usize {
        minutes.clamp(self.min_minutes, self.max_minutes)
    }
}

pub const WINDOW: WindowConfig = WindowConfig {
    min_minutes: 10,
    max_minutes: 100,
    default_minutes: 50,
    default_symbol: "NVDA",
};
