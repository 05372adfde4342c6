//! Risk Scorer
//!
//! Buckets the cleaned set into calendar hours and scores each bucket from
//! its slow-call, non-success and failed-call fractions.

pub mod rules;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::dataset::CleanRecord;
use self::rules::{DOWNTIME_WEIGHT, ERROR_WEIGHT, LATENCY_WEIGHT, MAX_RISK_SCORE};

/// Composite risk for one hourly window
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RiskBucket {
    /// Start of the hour this bucket covers
    pub timestamp: NaiveDateTime,
    /// Composite score in [0, 100]
    pub risk_score: f64,
}

/// Score every hourly bucket between the first and last record, inclusive.
///
/// Buckets align to calendar hour boundaries. Hours inside the span with
/// no records still get a bucket; with nothing to measure, every component
/// fraction counts as 0 and the bucket scores 0. Output is in ascending
/// time order, which downstream charting relies on.
pub fn score(records: &[CleanRecord], latency_threshold_ms: f64) -> Vec<RiskBucket> {
    let Some(first) = records.iter().map(|r| r.timestamp).min() else {
        return Vec::new();
    };
    let last = records.iter().map(|r| r.timestamp).max().unwrap_or(first);

    let end = truncate_to_hour(last);
    let mut hour = truncate_to_hour(first);
    let mut buckets = Vec::new();

    while hour <= end {
        let bucket_end = hour + Duration::hours(1);
        let group: Vec<&CleanRecord> = records
            .iter()
            .filter(|r| r.timestamp >= hour && r.timestamp < bucket_end)
            .collect();

        buckets.push(RiskBucket {
            timestamp: hour,
            risk_score: score_bucket(&group, latency_threshold_ms),
        });
        hour = bucket_end;
    }

    log::info!("Calculated risk scores for {} buckets", buckets.len());
    buckets
}

/// Weighted composite over one bucket, scaled to [0, 100]
fn score_bucket(group: &[&CleanRecord], latency_threshold_ms: f64) -> f64 {
    let slow = fraction(group, |r| r.latency_ms > latency_threshold_ms);
    let success = fraction(group, |r| r.status == "success");
    let failed = fraction(group, |r| r.status == "failed");

    // An empty group has no error rate either, not a 100% one.
    let error_rate = if group.is_empty() { 0.0 } else { 1.0 - success };

    let total = LATENCY_WEIGHT * slow + ERROR_WEIGHT * error_rate + DOWNTIME_WEIGHT * failed;
    (total * 100.0).min(MAX_RISK_SCORE)
}

/// Fraction of the group matching the predicate; 0 for an empty group
fn fraction(group: &[&CleanRecord], predicate: impl Fn(&CleanRecord) -> bool) -> f64 {
    if group.is_empty() {
        return 0.0;
    }
    group.iter().filter(|r| predicate(r)).count() as f64 / group.len() as f64
}

fn truncate_to_hour(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn clean(raw_ts: &str, status: &str, latency: f64) -> CleanRecord {
        CleanRecord {
            timestamp: ts(raw_ts),
            service: "SMS".to_string(),
            status: status.to_string(),
            latency_ms: latency,
        }
    }

    #[test]
    fn test_empty_input_yields_no_buckets() {
        assert!(score(&[], 500.0).is_empty());
    }

    #[test]
    fn test_healthy_bucket_scores_zero() {
        let records: Vec<CleanRecord> = (0..100)
            .map(|i| clean(&format!("2024-03-01 10:{:02}:{:02}", i / 60, i % 60), "success", 100.0))
            .collect();

        let buckets = score(&records, 500.0);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].risk_score, 0.0);
    }

    #[test]
    fn test_all_failed_bucket_scores_sixty() {
        let records: Vec<CleanRecord> = (0..10)
            .map(|i| clean(&format!("2024-03-01 10:0{}:00", i % 10), "failed", 100.0))
            .collect();

        // error 0.4 + downtime 0.2, latency kept below threshold
        let buckets = score(&records, 500.0);
        assert_eq!(buckets.len(), 1);
        assert!((buckets[0].risk_score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_bucket_arithmetic() {
        let records = vec![
            clean("2024-03-01 10:00:00", "success", 100.0),
            clean("2024-03-01 10:10:00", "success", 100.0),
            clean("2024-03-01 10:20:00", "success", 800.0),
            clean("2024-03-01 10:30:00", "failed", 100.0),
        ];

        // slow 1/4 -> 10, error 1/4 -> 10, failed 1/4 -> 5
        let buckets = score(&records, 500.0);
        assert!((buckets[0].risk_score - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_latency_threshold_is_strict() {
        let records = vec![clean("2024-03-01 10:00:00", "success", 500.0)];

        let buckets = score(&records, 500.0);
        assert_eq!(buckets[0].risk_score, 0.0);
    }

    #[test]
    fn test_empty_hours_inside_span_appear_with_zero() {
        let records = vec![
            clean("2024-03-01 10:30:00", "success", 100.0),
            clean("2024-03-01 12:30:00", "failed", 100.0),
        ];

        let buckets = score(&records, 500.0);
        let times: Vec<NaiveDateTime> = buckets.iter().map(|b| b.timestamp).collect();

        assert_eq!(
            times,
            vec![
                ts("2024-03-01 10:00:00"),
                ts("2024-03-01 11:00:00"),
                ts("2024-03-01 12:00:00"),
            ]
        );
        assert_eq!(buckets[1].risk_score, 0.0);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let statuses = ["success", "failed", "unknown", "timeout"];
        let records: Vec<CleanRecord> = (0..80)
            .map(|i| {
                clean(
                    &format!("2024-03-01 {:02}:{:02}:00", 8 + i / 30, (i * 2) % 60),
                    statuses[i % statuses.len()],
                    (i as f64) * 37.0,
                )
            })
            .collect();

        for bucket in score(&records, 500.0) {
            assert!(bucket.risk_score >= 0.0);
            assert!(bucket.risk_score <= 100.0);
        }
    }

    #[test]
    fn test_buckets_span_midnight() {
        let records = vec![
            clean("2024-03-01 23:45:00", "success", 100.0),
            clean("2024-03-02 00:15:00", "failed", 100.0),
        ];

        let buckets = score(&records, 500.0);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].timestamp, ts("2024-03-01 23:00:00"));
        assert_eq!(buckets[1].timestamp, ts("2024-03-02 00:00:00"));
    }
}
