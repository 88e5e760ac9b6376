//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! [`crate::infrastructure::memory`]. Mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link insert and lookup
//! - [`UserRepository`] - User creation with server-assigned IDs and lookup

pub mod link_repository;
pub mod store_error;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use store_error::StoreError;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
