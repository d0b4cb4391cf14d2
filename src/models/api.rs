//! Response envelope shared by every endpoint.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// JSON envelope: either `{"data": ...}` or `{"error": "..."}`.
///
/// Both shapes are returned with `200 OK`; clients tell them apart by key.
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthStatus {
    pub status: String,
}

/// Customer identity returned by login and register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct CustomerResponse {
    /// Hashed, external-facing form of the user id
    pub customer_id: String,
    /// Present on register responses only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_has_no_error_key() {
        let body = ApiResponse::success(HealthStatus {
            status: "ok".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"status": "ok"}})
        );
    }

    #[test]
    fn test_failure_envelope_has_no_data_key() {
        let body: ApiResponse<CustomerResponse> = ApiResponse::failure("User not found");
        assert!(!body.is_success());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"error": "User not found"})
        );
    }

    #[test]
    fn test_login_payload_omits_email() {
        let body = ApiResponse::success(CustomerResponse {
            customer_id: "42".to_string(),
            email: None,
        });
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"data": {"customer_id": "42"}})
        );
    }
}
