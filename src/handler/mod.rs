//! Request handler module
//!
//! Request routing dispatch and the embedded page payloads.

pub mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
