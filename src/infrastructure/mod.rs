//! Infrastructure layer implementing the domain repository traits.
//!
//! # Modules
//!
//! - [`memory`] - Process-memory repositories built on a shared keyed store

pub mod memory;
