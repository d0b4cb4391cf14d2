//! Configuration structures and loading utilities.
//!
//! Every setting comes from the process environment. A variable that is set
//! but empty is treated the same as an unset one and falls back to its default.

pub mod logging;
pub mod metrics;
pub mod server;
pub mod tracker;

pub use logging::*;
pub use metrics::*;
pub use server::*;
pub use tracker::*;

/// Look up an environment variable, treating empty values as missing.
pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
