//! The fixed ticker registry.
//!
//! Order matters: iteration order of `TICKERS` is the default row/column order
//! of the correlation matrix.

/// One tradable instrument known to the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerEntry {
    pub display_name: &'static str,
    pub symbol: &'static str,
    /// Centre price the mock feed perturbs around
    pub base_price: f64,
}

pub const TICKERS: &[TickerEntry] = &[
    TickerEntry {
        display_name: "Meta Platforms, Inc.",
        symbol: "META",
        base_price: 300.0,
    },
    TickerEntry {
        display_name: "Microsoft Corporation",
        symbol: "MSFT",
        base_price: 350.0,
    },
    TickerEntry {
        display_name: "Nvidia Corporation",
        symbol: "NVDA",
        base_price: 600.0,
    },
    TickerEntry {
        display_name: "PayPal Holdings, Inc.",
        symbol: "PYPL",
        base_price: 70.0,
    },
    TickerEntry {
        display_name: "TSMC",
        symbol: "2330TW",
        base_price: 100.0,
    },
    TickerEntry {
        display_name: "Tesla, Inc.",
        symbol: "TSLA",
        base_price: 200.0,
    },
    TickerEntry {
        display_name: "Visa Inc.",
        symbol: "V",
        base_price: 250.0,
    },
];
