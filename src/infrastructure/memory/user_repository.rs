//! In-memory implementation of user repository.

use async_trait::async_trait;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{StoreError, UserRepository};
use crate::infrastructure::memory::KeyedStore;
use crate::utils::key_generator::next_sequential_id;

/// Users held in process memory, keyed by sequential ID.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: KeyedStore<u64, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `users`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyCollision`] if two seeds share an ID.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Result<Self, StoreError> {
        let repo = Self::new();
        for user in users {
            repo.users.insert(user.id, user)?;
        }
        Ok(repo)
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.users
            .insert_with(next_sequential_id, |id| User::register(*id, new_user))
    }

    async fn find_by_id(&self, id: u64) -> Option<User> {
        self.users.get(&id)
    }
}
