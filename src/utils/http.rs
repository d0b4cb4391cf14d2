//! HTTP utility functions for extracting request information.

use crate::middleware::RequestId;
use actix_web::{HttpMessage, HttpRequest};

const FORWARDED_IP_HEADERS: [&str; 3] = ["X-Forwarded-For", "X-Real-IP", "CF-Connecting-IP"];

/// Extract the client IP, preferring proxy headers over the peer address.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    FORWARDED_IP_HEADERS
        .iter()
        .filter_map(|name| req.headers().get(*name))
        .filter_map(|value| value.to_str().ok())
        // X-Forwarded-For may carry a chain; the first hop is the client
        .filter_map(|value| value.split(',').next().map(str::trim))
        .find(|ip| !ip.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            req.connection_info()
                .peer_addr()
                .unwrap_or("unknown")
                .to_string()
        })
}

/// Extract user agent from request headers
pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("User-Agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}

/// Request id assigned by [`RequestIdMiddleware`](crate::middleware::RequestIdMiddleware)
pub fn extract_request_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}
