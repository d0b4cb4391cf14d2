//! Toggle for the `/metrics` endpoint.

use super::non_empty_var;

/// Whether `/metrics` renders the Prometheus registry
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Read `METRICS_ENABLED`; anything but a boolean keeps metrics on
    pub fn from_env() -> Self {
        Self::from_lookup(non_empty_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = lookup("METRICS_ENABLED")
            .filter(|v| !v.is_empty())
            .and_then(|v| v.trim().to_lowercase().parse().ok())
            .unwrap_or(true);

        Self { enabled }
    }
}
