//! Custom middleware implementations for the API.
//!
//! Request ids and request metrics are handled here so handlers stay focused
//! on directory lookups and relaying.

pub mod metrics;
pub mod request_id;

pub use metrics::*;
pub use request_id::*;
