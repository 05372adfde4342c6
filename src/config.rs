//! Configuration module

use std::env;

use crate::constants::{DEFAULT_ERROR_RATE_THRESHOLD, DEFAULT_LATENCY_THRESHOLD_MS};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Latency threshold in milliseconds for the risk scorer
    pub latency_threshold_ms: f64,

    /// Error-rate threshold (fraction)
    ///
    /// Accepted from the environment but not consumed by any scoring
    /// formula. Reserved; must not be repurposed without product sign-off.
    pub error_rate_threshold: f64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first if one is present, then falls back to the
    /// compiled-in defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            latency_threshold_ms: env::var("LATENCY_THRESHOLD")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .map(|v| v as f64)
                .unwrap_or(DEFAULT_LATENCY_THRESHOLD_MS),

            error_rate_threshold: env::var("ERROR_RATE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ERROR_RATE_THRESHOLD),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_threshold_ms: DEFAULT_LATENCY_THRESHOLD_MS,
            error_rate_threshold: DEFAULT_ERROR_RATE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.latency_threshold_ms, 500.0);
        assert_eq!(config.error_rate_threshold, 0.1);
    }
}
