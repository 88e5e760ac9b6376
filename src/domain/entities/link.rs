//! Short link entity.

/// A short code mapped to the URL it redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub target_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}
