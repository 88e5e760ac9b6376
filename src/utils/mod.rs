//! Utility functions for key generation, input validation and connection I/O.
//!
//! - [`key_generator`] - Random short codes and sequential IDs
//! - [`timed_stream`] - Idle and write timeouts on accepted connections
//! - [`url_validator`] - Absolute URL checks

pub mod key_generator;
pub mod timed_stream;
pub mod url_validator;
