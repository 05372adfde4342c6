//! Error handling

use thiserror::Error;

/// Errors surfaced by the analytics pipeline
///
/// Only two conditions are fatal: losing every record to the filters and a
/// malformed input table. Degenerate data (all-missing latency, zero
/// variance, empty buckets) resolves to documented defaults instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No records remain after service/time filtering. Signals a caller
    /// mismatch (wrong service name, window outside the data's range), not
    /// a processing bug.
    #[error("no records for service {service:?} within the last {window_hours}h")]
    EmptyDataset { service: String, window_hours: u32 },

    #[error("required column missing: {0}")]
    MissingColumn(String),

    #[error("unparseable timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("unparseable latency value: {0:?}")]
    InvalidLatency(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
