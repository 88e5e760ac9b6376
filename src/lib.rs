//! # memstore-api
//!
//! Minimal in-memory HTTP services built with Axum: a URL shortener, a user
//! store and a healthcheck server. Records live in process memory only.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records and repository traits
//! - **Application Layer** ([`application`]) - Validation, key generation, orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Lock-guarded in-memory store
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- shortener      # or: users, healthcheck
//! curl -X POST localhost:8080/shorten -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Optional environment variables are read via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::{ShortenerState, UserStoreState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, UserService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{NewUser, Password, Role, ShortLink, User};
    pub use crate::error::AppError;
    pub use crate::server::ServiceKind;
    pub use crate::state::{ShortenerState, UserStoreState};
}
