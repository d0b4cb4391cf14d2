//! Login and registration endpoint handlers.
//!
//! Both endpoints resolve the caller by email against the user directory.
//! A miss is answered with an `{"error": ...}` payload and `200 OK`; there is
//! no credential check.

use crate::{
    models::{
        ApiResponse, AuthAuditEvent, AuthEventOutcome, AuthEventType, CustomerResponse,
        LoginRequest, RegisterRequest,
    },
    services::hash_customer_id,
    state::AppState,
    utils::http::{extract_client_ip, extract_request_id, extract_user_agent},
};
use actix_web::{web, Error, HttpRequest, Result};
use paperclip::actix::api_v2_operation;

pub const USER_NOT_FOUND: &str = "User not found";
pub const REGISTRATION_NOT_ALLOWED: &str = "This email is not allowed to register with this api";

fn audit(req: &HttpRequest, event_type: AuthEventType, customer_id: Option<&str>) {
    let outcome = if customer_id.is_some() {
        AuthEventOutcome::Success
    } else {
        AuthEventOutcome::UnknownUser
    };

    AuthAuditEvent::new(
        event_type,
        outcome,
        extract_client_ip(req),
        req.method().to_string(),
        req.path().to_string(),
    )
    .with_user_agent(extract_user_agent(req))
    .with_request_id(extract_request_id(req))
    .with_customer_id(customer_id.map(str::to_string))
    .log();
}

/// User login endpoint
///
/// Looks the email up and returns the hashed customer id. The password is
/// ignored.
#[api_v2_operation(
    summary = "User Login",
    description = "Resolve a pre-provisioned user by email and return its customer id",
    tags("Authentication"),
    responses(
        (status = 200, description = "Customer id, or an error payload when the email is unknown", body = ApiResponse<CustomerResponse>),
        (status = 500, description = "Request body is not valid JSON")
    )
)]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<web::Json<ApiResponse<CustomerResponse>>, Error> {
    let user = match state.directory.find(&payload.email) {
        Some(user) => user,
        None => {
            audit(&req, AuthEventType::Login, None);
            return Ok(web::Json(ApiResponse::failure(USER_NOT_FOUND)));
        }
    };

    let customer_id = hash_customer_id(&user.user_id);
    audit(&req, AuthEventType::Login, Some(&customer_id));

    Ok(web::Json(ApiResponse::success(CustomerResponse {
        customer_id,
        email: None,
    })))
}

/// Registration endpoint
///
/// Only emails already in the directory may register. Accepted registrations
/// are relayed to the tracker before responding; a failed relay is logged and
/// otherwise ignored.
#[api_v2_operation(
    summary = "User Registration",
    description = "Register a pre-provisioned user and relay the event to the tracker",
    tags("Authentication"),
    responses(
        (status = 200, description = "Customer id and email, or an error payload when the email may not register", body = ApiResponse<CustomerResponse>),
        (status = 500, description = "Request body is not valid JSON")
    )
)]
pub async fn register(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<web::Json<ApiResponse<CustomerResponse>>, Error> {
    let user = match state.directory.find(&payload.email) {
        Some(user) => user,
        None => {
            audit(&req, AuthEventType::Register, None);
            return Ok(web::Json(ApiResponse::failure(REGISTRATION_NOT_ALLOWED)));
        }
    };

    let customer_id = hash_customer_id(&user.user_id);

    // Best effort: the outcome is already logged and counted by the client.
    let _ = state
        .tracker
        .relay_registration(
            &customer_id,
            &payload.consent_ids,
            &user.email,
            &payload.mobile,
        )
        .await;

    audit(&req, AuthEventType::Register, Some(&customer_id));

    Ok(web::Json(ApiResponse::success(CustomerResponse {
        customer_id,
        email: Some(user.email.clone()),
    })))
}
