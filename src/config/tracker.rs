//! Tracker relay and customer database configuration.

use super::non_empty_var;

pub const DEFAULT_PAM_ENDPOINT: &str = "https://stgx.pams.ai";
pub const DEFAULT_PAM_AUTH_TOKEN: &str = "no-default-token";
pub const DEFAULT_CUSTOMER_DATABASE: &str = "boodabest-login";

/// Settings for the outbound tracker service and the user directory source
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Base URL of the tracker, used verbatim
    pub endpoint: String,
    /// Value sent as-is in the `Authorization` header
    pub auth_token: String,
    /// Customer database name stamped on every event
    pub database: String,
    /// Raw JSON array of users from `USERS`, if provided
    pub users_json: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PAM_ENDPOINT.to_string(),
            auth_token: DEFAULT_PAM_AUTH_TOKEN.to_string(),
            database: DEFAULT_CUSTOMER_DATABASE.to_string(),
            users_json: None,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(non_empty_var)
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            endpoint: get("PAM_ENDPOINT").unwrap_or_else(|| DEFAULT_PAM_ENDPOINT.to_string()),
            auth_token: get("PAM_AUTH_TOKEN")
                .unwrap_or_else(|| DEFAULT_PAM_AUTH_TOKEN.to_string()),
            database: get("CUSTOMER_DATABASE")
                .unwrap_or_else(|| DEFAULT_CUSTOMER_DATABASE.to_string()),
            users_json: get("USERS"),
        }
    }

    /// Events endpoint on the tracker service
    pub fn events_url(&self) -> String {
        format!("{}/trackers/events", self.endpoint)
    }
}
