use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One raw service-call log row
///
/// Duplicates are valid and order carries no meaning. `status` is
/// case-insensitive on input; "success" and "failed" are the recognized
/// values and anything else passes through untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub service: String,
    pub status: Option<String>,
    pub latency_ms: Option<f64>,
}

/// A log row after filtering and imputation
///
/// Missing latency has been imputed with the window mean and missing
/// status replaced with "unknown"; status is always lower-case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub timestamp: NaiveDateTime,
    pub service: String,
    pub status: String,
    pub latency_ms: f64,
}
