//! CSV Loader
//!
//! Parses VAS log exports into [`LogRecord`]s. Timestamps are parsed here
//! and status is lower-cased once at load. Blank status or latency cells
//! load as absent values for the filter stage to impute.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::dataset::record::LogRecord;
use crate::error::PipelineError;

/// Load VAS logs from a CSV file
///
/// The header must carry `timestamp`, `service`, `status` and `latency_ms`;
/// a missing column fails the whole load before any row is parsed.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<LogRecord>, PipelineError> {
    let path = path.as_ref();
    log::info!("Loading data from {}", path.display());

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
    };
    let ts_idx = column("timestamp")?;
    let service_idx = column("service")?;
    let status_idx = column("status")?;
    let latency_idx = column("latency_ms")?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let timestamp = parse_timestamp(row.get(ts_idx).unwrap_or(""))?;
        let service = row.get(service_idx).unwrap_or("").to_string();

        let status = match row.get(status_idx).unwrap_or("").trim() {
            "" => None,
            value => Some(value.to_lowercase()),
        };
        let latency_ms = match row.get(latency_idx).unwrap_or("").trim() {
            "" => None,
            value => Some(
                value
                    .parse::<f64>()
                    .map_err(|_| PipelineError::InvalidLatency(value.to_string()))?,
            ),
        };

        records.push(LogRecord {
            timestamp,
            service,
            status,
            latency_ms,
        });
    }

    log::info!("Loaded {} log entries", records.len());
    Ok(records)
}

/// Parse a timestamp cell
///
/// Accepts RFC 3339 (offset dropped) and the two common naive forms.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, PipelineError> {
    let raw = raw.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    Err(PipelineError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-03-01T10:30:00").is_ok());
        assert!(parse_timestamp("2024-03-01 10:30:00").is_ok());
        assert!(parse_timestamp("2024-03-01T10:30:00+07:00").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_rfc3339_drops_offset() {
        let dt = parse_timestamp("2024-03-01T10:30:00+02:00").unwrap();
        assert_eq!(dt, parse_timestamp("2024-03-01T08:30:00").unwrap());
    }
}
