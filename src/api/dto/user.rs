//! DTOs for user endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{NewUser, Password, Role, User};

/// Shape a user ID path segment must have.
static USER_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").unwrap());

/// Parses a `/users/{id}` path segment.
///
/// Returns `None` unless the segment matches `[1-9][0-9]*` and fits in `u64`.
pub fn parse_user_id(raw: &str) -> Option<u64> {
    if !USER_ID_REGEX.is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Request body for `POST /users`.
///
/// `role` is accepted so clients sending it still decode, but it is dropped
/// by [`CreateUserRequest::into_new_user`] and never stored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    pub role: Option<String>,

    #[serde(default)]
    pub password: String,
}

impl CreateUserRequest {
    /// Keeps only the fields a client is allowed to set.
    pub fn into_new_user(self) -> NewUser {
        if let Some(role) = self.role.as_deref().filter(|role| *role != "user") {
            tracing::debug!(requested_role = %role, "Ignoring client-supplied role");
        }

        NewUser {
            name: self.name,
            password: Password::new(self.password),
        }
    }
}

/// Public view of a user. The password never appears here.
#[serde_as]
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    #[serde_as(as = "DisplayFromStr")]
    pub id: u64,
    pub name: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}
