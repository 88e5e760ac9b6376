//! Shared handler state for each service.
//!
//! Each store is built once at start-up and handed to the router; handlers
//! reach it only through these types.

use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::domain::entities::User;
use crate::domain::repositories::StoreError;
use crate::infrastructure::memory::{InMemoryLinkRepository, InMemoryUserRepository};

pub type InMemoryLinkService = LinkService<InMemoryLinkRepository>;
pub type InMemoryUserService = UserService<InMemoryUserRepository>;

/// State of the URL shortener service.
#[derive(Clone)]
pub struct ShortenerState {
    pub link_service: Arc<InMemoryLinkService>,
}

impl ShortenerState {
    pub fn new(link_service: Arc<InMemoryLinkService>) -> Self {
        Self { link_service }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryLinkRepository::new());
        Self::new(Arc::new(LinkService::new(repository)))
    }
}

/// State of the user store service.
#[derive(Clone)]
pub struct UserStoreState {
    pub user_service: Arc<InMemoryUserService>,
}

impl UserStoreState {
    pub fn new(user_service: Arc<InMemoryUserService>) -> Self {
        Self { user_service }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryUserRepository::new())
    }

    /// State backed by an in-memory store pre-populated with `users`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyCollision`] if two users share an ID.
    pub fn seeded(users: impl IntoIterator<Item = User>) -> Result<Self, StoreError> {
        let repository = InMemoryUserRepository::with_users(users)?;
        Ok(Self::from_repository(repository))
    }

    fn from_repository(repository: InMemoryUserRepository) -> Self {
        Self::new(Arc::new(UserService::new(Arc::new(repository))))
    }
}
