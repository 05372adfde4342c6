//! Pipeline Orchestration
//!
//! One call: filter/clean, then anomaly detection and risk scoring over the
//! same cleaned set. The two downstream stages are independent; neither
//! sees the other's output.

use serde::{Deserialize, Serialize};

use crate::anomaly::{self, AnomalyRecord};
use crate::config::Config;
use crate::dataset::{CleanRecord, LogRecord};
use crate::error::PipelineError;
use crate::filter;
use crate::risk::{self, RiskBucket};

/// The three tabular results of one pipeline run
///
/// Each is consumable without reference to the others.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PipelineOutput {
    pub cleaned: Vec<CleanRecord>,
    pub anomalies: Vec<AnomalyRecord>,
    pub risk: Vec<RiskBucket>,
}

/// Run the full pipeline over one in-memory dataset
pub fn run(
    records: &[LogRecord],
    service: &str,
    window_hours: u32,
    config: &Config,
) -> Result<PipelineOutput, PipelineError> {
    let cleaned = filter::process(records, service, window_hours)?;
    let anomalies = anomaly::detect(&cleaned);
    let risk = risk::score(&cleaned, config.latency_threshold_ms);

    Ok(PipelineOutput {
        cleaned,
        anomalies,
        risk,
    })
}
