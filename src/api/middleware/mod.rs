//! HTTP middleware for request processing.
//!
//! Provides request IDs, request tracing and panic recovery.

pub mod recover;
pub mod request_id;
pub mod tracing;
