//! HTTP listener configuration.

use super::non_empty_var;

/// Configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let bind_address = non_empty_var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        Self { bind_address }
    }
}
