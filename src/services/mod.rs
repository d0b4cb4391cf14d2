//! Business logic and service layer modules.
//!
//! The user directory, customer id hashing, the tracker relay client and
//! metrics collection live here. Nothing in this layer knows about HTTP
//! routing.

pub mod customer_id;
pub mod directory;
pub mod metrics;
pub mod tracker;

pub use customer_id::*;
pub use directory::*;
pub use metrics::*;
pub use tracker::*;
