//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - process-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyCollision`] if the code is already taken.
    /// The existing link is left untouched.
    async fn insert(&self, link: ShortLink) -> Result<(), StoreError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Option<ShortLink>;
}
