//! Application layer services implementing business logic.
//!
//! Services coordinate validation, key generation and repository calls, and
//! give HTTP handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution
//! - [`services::user_service::UserService`] - User creation and lookup

pub mod services;
