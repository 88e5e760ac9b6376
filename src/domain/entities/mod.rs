//! Core domain entities.
//!
//! - [`ShortLink`] - A short code mapped to a target URL
//! - [`User`] - A user record keyed by a numeric ID
//!
//! Creation inputs are separate types ([`NewUser`]) so that fields the
//! server owns (ID, role) can never be supplied by a client.

pub mod link;
pub mod user;

pub use link::ShortLink;
pub use user::{NewUser, Password, Role, User};
