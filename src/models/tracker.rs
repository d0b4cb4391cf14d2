//! Outbound event sent to the tracker service.

use serde::{Deserialize, Serialize};

pub const REGISTER_EVENT: &str = "register";

/// Event body posted to `{endpoint}/trackers/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterEvent {
    pub event: String,
    pub form_fields: FormFields,
}

/// Form fields of a registration event.
///
/// `sms` is left out of the JSON entirely when there is no mobile number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(rename = "_database")]
    pub database: String,
    #[serde(rename = "_consent_ids")]
    pub consent_ids: String,
    pub customer: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<String>,
}

impl RegisterEvent {
    /// Build a registration event; an empty `mobile` yields no `sms` field.
    pub fn new(
        database: impl Into<String>,
        customer_id: impl Into<String>,
        consent_ids: impl Into<String>,
        email: impl Into<String>,
        mobile: &str,
    ) -> Self {
        Self {
            event: REGISTER_EVENT.to_string(),
            form_fields: FormFields {
                database: database.into(),
                consent_ids: consent_ids.into(),
                customer: customer_id.into(),
                email: email.into(),
                sms: (!mobile.is_empty()).then(|| mobile.to_string()),
            },
        }
    }
}
