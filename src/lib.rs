//! VAS Performance Analytics - Core Pipeline
//!
//! Ingests time-stamped service-call logs (SMS, USSD, IVR) and produces
//! three independent tabular results: a cleaned working set, a set of
//! latency anomalies, and a per-hour composite risk score sequence.
//! The dashboard shell, chart rendering and upload handling live in the
//! UI layer; this crate only transforms data.

pub mod anomaly;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod risk;

pub use anomaly::AnomalyRecord;
pub use config::Config;
pub use dataset::{CleanRecord, LogRecord};
pub use error::PipelineError;
pub use pipeline::{run, PipelineOutput};
pub use risk::RiskBucket;
