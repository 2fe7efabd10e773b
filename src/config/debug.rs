//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

/// Emit detailed serialization/deserialization logs for the subject cache.
pub const PRINT_SERDE: bool = false;

/// Emit a per-subject line when tower intervals are built.
pub const PRINT_INTERVAL_SUMMARY: bool = false;

/// Emit a line for every merged pair (very noisy: O(N^2) lines).
pub const PRINT_MERGE_EVENTS: bool = false;

/// Emit row counts while writing the TSV outputs.
pub const PRINT_EXPORT_SUMMARY: bool = true;
