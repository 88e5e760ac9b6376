//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - JSON body extractor with the service's rejection mapping
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request ID, tracing and panic recovery middleware
//! - [`routes`] - Route configuration per service

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
