//! Filter/Clean Stage
//!
//! Selects a service subset and a trailing time window, then fills the
//! holes: missing latency takes the window mean, missing status becomes
//! "unknown". Status is re-lower-cased here regardless of what the loader
//! did, so the stage is safe to run on data from any source.

use chrono::Duration;

use crate::constants::ALL_SERVICES;
use crate::dataset::{CleanRecord, LogRecord};
use crate::error::PipelineError;

/// Filter to one service and a trailing window, then impute missing values.
///
/// The window is the closed interval `[max(ts) - window_hours, max(ts)]`
/// over the service-filtered records, so the newest record always survives.
/// Losing every record to the service filter is an [`PipelineError::EmptyDataset`]
/// error: it means the caller asked for a service or a window the data does
/// not contain, which must surface distinctly from a processing bug.
///
/// The caller's slice is never mutated; the cleaned vector is the only
/// output.
pub fn process(
    records: &[LogRecord],
    service: &str,
    window_hours: u32,
) -> Result<Vec<CleanRecord>, PipelineError> {
    let selected: Vec<&LogRecord> = records
        .iter()
        .filter(|r| service == ALL_SERVICES || r.service == service)
        .collect();

    let end_time = selected
        .iter()
        .map(|r| r.timestamp)
        .max()
        .ok_or_else(|| PipelineError::EmptyDataset {
            service: service.to_string(),
            window_hours,
        })?;
    let start_time = end_time - Duration::hours(i64::from(window_hours));

    let windowed: Vec<&LogRecord> = selected
        .into_iter()
        .filter(|r| r.timestamp >= start_time && r.timestamp <= end_time)
        .collect();

    // Mean over latencies present in the window, computed before any fill.
    // With no latency present at all the fill value is 0.
    let present: Vec<f64> = windowed.iter().filter_map(|r| r.latency_ms).collect();
    let mean_latency = if present.is_empty() {
        0.0
    } else {
        present.iter().sum::<f64>() / present.len() as f64
    };

    let cleaned: Vec<CleanRecord> = windowed
        .into_iter()
        .map(|r| CleanRecord {
            timestamp: r.timestamp,
            service: r.service.clone(),
            status: r
                .status
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_else(|| "unknown".to_string()),
            latency_ms: r.latency_ms.unwrap_or(mean_latency),
        })
        .collect();

    log::info!("Processed {} log entries for {}", cleaned.len(), service);
    Ok(cleaned)
}
