//! Domain layer containing the records and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core records ([`entities::ShortLink`], [`entities::User`])
//! - [`repositories`] - Data access trait definitions and the store error type
//!
//! The domain layer has no dependency on HTTP or on a concrete storage
//! backend. In-memory implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
