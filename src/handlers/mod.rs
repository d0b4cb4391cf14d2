//! HTTP request handlers for API endpoints.

pub mod auth;
pub mod health;
pub mod metrics;
pub mod openapi;

pub use auth::*;
pub use health::*;
pub use metrics::*;
pub use openapi::*;
