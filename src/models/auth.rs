//! Login and registration request bodies.
//!
//! Missing fields decode as empty strings so partial bodies are accepted;
//! only a syntactically broken body is rejected.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Request model for user login
///
/// The password is accepted but never compared; login is an identity lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request model for registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub mobile: String,
    pub password: String,
    /// Comma separated consent ids, forwarded untouched
    pub consent_ids: String,
}
