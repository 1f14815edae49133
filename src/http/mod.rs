//! HTTP protocol layer module
//!
//! Builders for the fixed set of responses the server produces,
//! decoupled from routing.

pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_health_response, build_html_response};
