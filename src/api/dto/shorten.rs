//! DTOs for link shortening endpoint.

use serde::Deserialize;

/// Request to shorten a single URL.
///
/// A missing `url` decodes as an empty string and fails validation.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}
