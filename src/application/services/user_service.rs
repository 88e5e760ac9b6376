//! User creation and lookup service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating and retrieving users.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Stores a new user under the next sequential ID.
    ///
    /// The stored role is always `user`. The name is expected to be
    /// validated already (see [`crate::api::dto::user::CreateUserRequest`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the assigned ID was already taken.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.user_repository.create(new_user).await?;
        info!(user_id = user.id, "Created user");

        Ok(user)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`User not found.`) if no user has this ID.
    pub async fn get_user(&self, id: u64) -> Result<User, AppError> {
        self.user_repository.find_by_id(id).await.ok_or_else(|| {
            debug!(user_id = id, "User not found");
            user_not_found()
        })
    }
}

/// Error returned for any unknown or malformed user ID.
pub fn user_not_found() -> AppError {
    AppError::not_found("User not found.")
}
