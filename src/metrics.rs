//! Calculation usage counter
//!
//! Lives beside the engine, never inside it. Callers construct a counter and
//! record a calculation after each successful projection they serve.

use serde::Serialize;
use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

/// Whether usage should be counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl MetricsConfig {
    /// Counting is on only in production with `METRICS_ENABLED=true`
    pub fn from_env() -> Self {
        let production = env::var("APP_ENV").map(|v| v == "production").unwrap_or(false);
        let enabled = env::var("METRICS_ENABLED").map(|v| v == "true").unwrap_or(false);
        Self::from_flags(production, enabled)
    }

    pub fn from_flags(production: bool, metrics_enabled: bool) -> Self {
        Self {
            enabled: production && metrics_enabled,
        }
    }
}

/// Result of recording one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageCount {
    pub count: u64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

/// Thread-safe running total of served calculations
#[derive(Debug, Default)]
pub struct CalcCounter {
    config: MetricsConfig,
    count: AtomicU64,
}

impl CalcCounter {
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            count: AtomicU64::new(0),
        }
    }

    /// Count one calculation. When counting is disabled the current total is
    /// returned unchanged and marked as skipped.
    pub fn record(&self) -> UsageCount {
        if !self.config.enabled {
            return UsageCount {
                count: self.count(),
                skipped: true,
            };
        }
        let count = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        UsageCount { count, skipped: false }
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
