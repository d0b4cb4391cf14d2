//! Data models and schemas for the gateway.
//!
//! This module contains request/response bodies, the user record held by the
//! directory, the outbound tracker event, and audit log types.

pub mod api;
pub mod audit;
pub mod auth;
pub mod tracker;
pub mod user;

pub use api::*;
pub use audit::*;
pub use auth::*;
pub use tracker::*;
pub use user::*;
