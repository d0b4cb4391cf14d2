//! Event relay to the external tracker service.
//!
//! Registration events are posted once, with a fixed 30 second budget and no
//! retries. Only transport failures count as errors; whatever status and body
//! the tracker answers with is passed back untouched for logging.

use crate::{config::TrackerConfig, models::RegisterEvent, services::AppMetrics};
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Total time allowed for one tracker request, measured from when it starts
pub const TRACKER_TIMEOUT: Duration = Duration::from_secs(30);

const CONTACT_COOKIE_HEADER: &str = "x-allow-contact-id-cookie";

/// Transport-level failures talking to the tracker
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("tracker request timed out")]
    Timeout,

    #[error("tracker network error: {0}")]
    Network(#[source] reqwest::Error),
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Network(e)
        }
    }
}

/// Whatever the tracker answered, success status or not
#[derive(Debug, Clone)]
pub struct TrackerResponse {
    pub status: u16,
    pub body: String,
}

/// Result of a best-effort relay. Callers are free to drop it.
#[derive(Debug)]
pub enum RelayOutcome {
    Delivered(TrackerResponse),
    Failed(RelayError),
}

impl RelayOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, RelayOutcome::Delivered(_))
    }
}

/// Client for `{endpoint}/trackers/events`
#[derive(Clone)]
pub struct TrackerClient {
    client: Client,
    events_url: String,
    auth_token: String,
    database: String,
    destination: String,
    metrics: Option<AppMetrics>,
}

impl TrackerClient {
    /// Client with the standard [`TRACKER_TIMEOUT`].
    pub fn new(config: &TrackerConfig, metrics: Option<AppMetrics>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config, metrics, TRACKER_TIMEOUT)
    }

    /// Client whose requests give up after `timeout` in total.
    pub fn with_timeout(
        config: &TrackerConfig,
        metrics: Option<AppMetrics>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let events_url = config.events_url();

        Ok(Self {
            client,
            destination: extract_destination(&events_url),
            events_url,
            auth_token: config.auth_token.clone(),
            database: config.database.clone(),
            metrics,
        })
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// POST one event and return the tracker's status and raw body.
    pub async fn send_register_event(
        &self,
        event: &RegisterEvent,
    ) -> Result<TrackerResponse, RelayError> {
        debug!(
            destination = %self.destination,
            body = %serde_json::to_string(event).unwrap_or_default(),
            "Posting register event"
        );

        let response = self
            .client
            .post(&self.events_url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_token)
            .header(CONTACT_COOKIE_HEADER, "false")
            .json(event)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TrackerResponse { status, body })
    }

    /// Relay a registration without letting failures reach the caller.
    ///
    /// The outcome is logged and counted here; the returned value exists only
    /// for callers that want to inspect it.
    pub async fn relay_registration(
        &self,
        customer_id: &str,
        consent_ids: &str,
        email: &str,
        mobile: &str,
    ) -> RelayOutcome {
        let event = RegisterEvent::new(&self.database, customer_id, consent_ids, email, mobile);
        let start = Instant::now();

        let outcome = match self.send_register_event(&event).await {
            Ok(response) => {
                info!(
                    destination = %self.destination,
                    customer_id = %customer_id,
                    status = response.status,
                    duration_ms = start.elapsed().as_millis(),
                    body = %response.body,
                    "Tracker responded to register event"
                );
                RelayOutcome::Delivered(response)
            }
            Err(e) => {
                warn!(
                    destination = %self.destination,
                    customer_id = %customer_id,
                    error = %e,
                    duration_ms = start.elapsed().as_millis(),
                    "Register event relay failed"
                );
                RelayOutcome::Failed(e)
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_relay(&outcome);
        }

        outcome
    }
}

/// Host part of the tracker URL, for log and metric labels
fn extract_destination(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.host_str().unwrap_or("unknown").to_string())
        .unwrap_or_else(|_| "invalid_url".to_string())
}
