//! PAM Gateway - login and registration for pre-provisioned users
//!
//! The gateway keeps an immutable, in-memory directory of users loaded from
//! the `USERS` environment variable (or a built-in synthetic set) and exposes:
//! - `POST /login` - resolve an email to its hashed customer id
//! - `POST /register` - same lookup, plus a best-effort registration event
//!   posted to the tracker service
//! - `GET /` - health check
//!
//! ## Architecture
//!
//! - `config/` - environment-driven settings
//! - `models/` - request, response, user and tracker event types
//! - `services/` - user directory, customer id hashing, tracker relay, metrics
//! - `handlers/` - HTTP handlers and the app factory
//! - `middleware/` - request ids and request metrics
//! - `state` - dependencies injected into handlers
//!
//! ## Quick Start
//!
//! ```no_run
//! use pam_gateway::{create_app, AppMetrics, AppState, MetricsConfig, TrackerConfig};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let metrics = AppMetrics::new().expect("metrics registry");
//!     let state = AppState::from_config(&TrackerConfig::from_env(), metrics)
//!         .expect("http client");
//!     let _app = create_app(state, MetricsConfig::from_env());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod utils;

pub use config::{LogConfig, LogFormat, MetricsConfig, ServerConfig, TrackerConfig};
pub use handlers::{create_app, create_openapi_spec, get_metrics, health, login, register};
pub use middleware::{MetricsMiddleware, RequestId, RequestIdMiddleware};
pub use models::{
    ApiResponse, AuthAuditEvent, AuthEventOutcome, AuthEventType, CustomerResponse, FormFields,
    HealthStatus, LoginRequest, RegisterEvent, RegisterRequest, User,
};
pub use services::{
    AppMetrics, DirectoryError, RelayError, RelayOutcome, TrackerClient, TrackerResponse,
    UserDirectory, hash_customer_id,
};
pub use state::AppState;
