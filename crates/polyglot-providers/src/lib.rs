//! # polyglot-providers
//!
//! Translation provider implementations for Polyglot.

mod classify;
pub mod google_cloud;
pub mod google_web;

pub use classify::{classify_status, classify_transport_error};
pub use google_cloud::GoogleCloudProvider;
pub use google_web::GoogleWebProvider;

/// Browser-like user agent; the web endpoint throttles obvious bots harder.
pub(crate) const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
