use crate::config::{TICKERS, TickerEntry};

/// Read-only view over a fixed set of tickers.
/// Lookups are linear; the registry is a handful of entries.
#[derive(Debug, Clone, Copy)]
pub struct TickerRegistry {
    entries: &'static [TickerEntry],
}

impl TickerRegistry {
    pub const fn new(entries: &'static [TickerEntry]) -> Self {
        Self { entries }
    }

    /// Symbols in registry order. This is the default matrix ordering.
    pub fn symbols(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.symbol.to_string()).collect()
    }

    pub fn get(&self, symbol: &str) -> Option<&'static TickerEntry> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn base_price(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|e| e.base_price)
    }

    pub fn display_name(&self, symbol: &str) -> Option<&'static str> {
        self.get(symbol).map(|e| e.display_name)
    }

    /// Reverse lookup: display name to symbol.
    pub fn symbol_for(&self, display_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.display_name == display_name)
            .map(|e| e.symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TickerRegistry {
    fn default() -> Self {
        Self::new(TICKERS)
    }
}
