//! Central Configuration Constants
//!
//! Single source of truth for pipeline defaults. To change a default
//! threshold or the ensemble shape, only edit this file.

/// Default latency threshold (milliseconds)
///
/// A call slower than this counts against its bucket's latency component.
/// Override with the `LATENCY_THRESHOLD` environment variable.
pub const DEFAULT_LATENCY_THRESHOLD_MS: f64 = 500.0;

/// Default error-rate threshold (fraction)
///
/// Read from `ERROR_RATE_THRESHOLD`. Carried in [`crate::Config`] for
/// operators to set ahead of time; no scoring formula consumes it yet.
pub const DEFAULT_ERROR_RATE_THRESHOLD: f64 = 0.1;

/// Default analysis window (hours)
pub const DEFAULT_WINDOW_HOURS: u32 = 12;

/// Sentinel service name that disables service filtering
pub const ALL_SERVICES: &str = "All";

// ============================================
// Anomaly ensemble shape
// ============================================

/// Fixed seed for the anomaly ensemble
///
/// Identical input must yield an identical anomaly set across runs and
/// processes, so the ensemble never draws from entropy.
pub const ANOMALY_SEED: u64 = 42;

/// Expected proportion of outliers in the latency distribution
pub const CONTAMINATION: f64 = 0.1;

/// Number of isolation trees in the ensemble
pub const FOREST_SIZE: usize = 100;

/// Per-tree subsample cap
pub const SUBSAMPLE_SIZE: usize = 256;
