//! Risk Scoring Weights
//!
//! Component weights for the composite bucket score. No scoring logic
//! here, only constants.

/// Weight of the slow-call fraction (40%)
pub const LATENCY_WEIGHT: f64 = 0.4;

/// Weight of the non-success fraction (40%)
pub const ERROR_WEIGHT: f64 = 0.4;

/// Weight of the failed-call fraction (20%)
pub const DOWNTIME_WEIGHT: f64 = 0.2;

/// Ceiling for a bucket's composite score
pub const MAX_RISK_SCORE: f64 = 100.0;
