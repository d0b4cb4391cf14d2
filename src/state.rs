//! Shared, read-only dependencies handed to every request handler.

use crate::{
    config::TrackerConfig,
    services::{AppMetrics, TrackerClient, UserDirectory},
};
use std::sync::Arc;

/// Everything a handler needs, built once before the server starts.
///
/// Cloning is cheap; each worker gets its own handle to the same directory.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub tracker: TrackerClient,
    pub metrics: AppMetrics,
}

impl AppState {
    pub fn new(directory: UserDirectory, tracker: TrackerClient, metrics: AppMetrics) -> Self {
        Self {
            directory: Arc::new(directory),
            tracker,
            metrics,
        }
    }

    /// Build the directory and tracker client from configuration.
    pub fn from_config(config: &TrackerConfig, metrics: AppMetrics) -> Result<Self, reqwest::Error> {
        let directory = UserDirectory::from_json(config.users_json.as_deref(), &config.database);
        let tracker = TrackerClient::new(config, Some(metrics.clone()))?;
        Ok(Self::new(directory, tracker, metrics))
    }
}
