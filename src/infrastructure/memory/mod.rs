//! In-memory repository implementations.
//!
//! All repositories delegate to [`KeyedStore`], which serializes every
//! mutation behind a single write lock. Nothing survives a restart.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Short links keyed by code
//! - [`InMemoryUserRepository`] - Users keyed by sequential ID

pub mod keyed_store;
pub mod link_repository;
pub mod user_repository;

pub use keyed_store::KeyedStore;
pub use link_repository::InMemoryLinkRepository;
pub use user_repository::InMemoryUserRepository;
