//! Anomaly Detector
//!
//! Fits an isolation forest on the cleaned set's latency values and labels
//! roughly the most isolated 10% as outliers. The seed is fixed, so the
//! same input always yields the same anomaly set.

mod forest;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{ANOMALY_SEED, CONTAMINATION, FOREST_SIZE, SUBSAMPLE_SIZE};
use crate::dataset::CleanRecord;
use self::forest::IsolationForest;

/// A cleaned record flagged by the detector
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnomalyRecord {
    pub timestamp: NaiveDateTime,
    pub service: String,
    pub status: String,
    pub latency_ms: f64,
    /// Decision value; lower is more anomalous, negative means outlier
    pub anomaly_score: f64,
    pub is_anomaly: bool,
}

/// Label latency outliers in the cleaned set.
///
/// Returns only the flagged subset, each record carrying its decision
/// value. An empty input returns an empty vector without fitting anything;
/// a zero-variance input fits fine and flags nothing.
pub fn detect(records: &[CleanRecord]) -> Vec<AnomalyRecord> {
    if records.is_empty() {
        return Vec::new();
    }

    let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
    let forest = IsolationForest::fit(&latencies, FOREST_SIZE, SUBSAMPLE_SIZE, ANOMALY_SEED);

    // Decision values follow the usual convention: raw = -s(x), shifted so
    // the contamination quantile sits at zero. Strictly negative = outlier.
    let raw: Vec<f64> = latencies.iter().map(|v| -forest.score(*v)).collect();
    let offset = contamination_offset(&raw, CONTAMINATION);

    let anomalies: Vec<AnomalyRecord> = records
        .iter()
        .zip(&raw)
        .filter_map(|(record, raw_score)| {
            let anomaly_score = raw_score - offset;
            (anomaly_score < 0.0).then(|| AnomalyRecord {
                timestamp: record.timestamp,
                service: record.service.clone(),
                status: record.status.clone(),
                latency_ms: record.latency_ms,
                anomaly_score,
                is_anomaly: true,
            })
        })
        .collect();

    log::info!("Detected {} anomalies", anomalies.len());
    anomalies
}

/// Decision threshold: the raw score at the contamination quantile.
///
/// Points strictly below it are outliers, so at most ~`contamination` of
/// the set gets flagged, and a tie at the threshold (the zero-variance
/// limit) flags nothing.
fn contamination_offset(raw: &[f64], contamination: f64) -> f64 {
    let mut sorted = raw.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let idx = (sorted.len() as f64 * contamination).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
