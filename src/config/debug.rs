//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so debug
//! builds stay readable. All flags are further gated by `cfg(debug_assertions)`.

/// Emit a log line per ticker as each fetch completes.
pub const PRINT_FETCH_PROGRESS: bool = false;

/// Emit fetch cycle bookkeeping (issued, applied, discarded as stale).
pub const PRINT_CYCLE_EVENTS: bool = true;

/// Emit the full correlation matrix after every successful rebuild.
pub const PRINT_MATRIX: bool = false;
