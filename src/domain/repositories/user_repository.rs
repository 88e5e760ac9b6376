//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryUserRepository`] - process-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Assigns the next ID and stores the user in one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyCollision`] if the computed ID is already
    /// occupied (only possible when seeded IDs leave gaps).
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: u64) -> Option<User>;
}
