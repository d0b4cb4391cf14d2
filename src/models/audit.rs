//! Audit logging data structures and types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Kinds of identity events worth an audit line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    Login,
    Register,
}

/// Outcomes of identity events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventOutcome {
    Success,
    /// The email is not in the directory
    UnknownUser,
}

/// Structured audit log entry.
///
/// Only the hashed customer id is recorded, never the raw email or user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAuditEvent {
    pub event_type: AuthEventType,
    pub outcome: AuthEventOutcome,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub customer_id: Option<String>,
    pub method: String,
    pub endpoint: String,
    pub request_id: Option<String>,
}

impl AuthAuditEvent {
    pub fn new(
        event_type: AuthEventType,
        outcome: AuthEventOutcome,
        ip_address: String,
        method: String,
        endpoint: String,
    ) -> Self {
        Self {
            event_type,
            outcome,
            timestamp: Utc::now(),
            ip_address,
            user_agent: None,
            customer_id: None,
            method,
            endpoint,
            request_id: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_customer_id(mut self, customer_id: Option<String>) -> Self {
        self.customer_id = customer_id;
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Log the audit event using structured logging
    pub fn log(&self) {
        info!(
            target: "auth_audit",
            event_type = ?self.event_type,
            outcome = ?self.outcome,
            timestamp = %self.timestamp,
            ip_address = %self.ip_address,
            user_agent = ?self.user_agent,
            customer_id = ?self.customer_id,
            method = %self.method,
            endpoint = %self.endpoint,
            request_id = ?self.request_id,
            "Authentication audit event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_optional_fields() {
        let event = AuthAuditEvent::new(
            AuthEventType::Register,
            AuthEventOutcome::UnknownUser,
            "10.0.0.1".to_string(),
            "POST".to_string(),
            "/register".to_string(),
        )
        .with_user_agent(Some("curl/8".to_string()))
        .with_request_id(Some("req-1".to_string()));

        assert_eq!(event.user_agent.as_deref(), Some("curl/8"));
        assert_eq!(event.request_id.as_deref(), Some("req-1"));
        assert!(event.customer_id.is_none());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "register");
        assert_eq!(json["outcome"], "unknown_user");
    }
}
