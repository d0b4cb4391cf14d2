//! Health check endpoint handler.

use crate::models::{ApiResponse, HealthStatus};
use actix_web::{web, Error, Result};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns {\"data\": {\"status\": \"ok\"}} while the gateway is serving.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = ApiResponse<HealthStatus>)
    )
)]
pub async fn health() -> Result<web::Json<ApiResponse<HealthStatus>>, Error> {
    Ok(web::Json(ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
    })))
}
