//! User entity and its creation input.

use std::fmt;

use serde::Serialize;

/// Authorization role attached to a user.
///
/// Only [`Role::User`] can be produced through the create path; other roles
/// exist for records seeded at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// Write-only password value.
///
/// Not `Serialize`, and `Debug` never prints the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub role: Role,
    pub password: Password,
}

impl User {
    /// Builds the record for a newly created user.
    ///
    /// The role is always [`Role::User`]; [`NewUser`] has no role field.
    pub fn register(id: u64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            role: Role::User,
            password: new_user.password,
        }
    }

    /// Builds a record with an explicit role, used for seeding.
    pub fn with_role(id: u64, name: impl Into<String>, role: Role, password: Password) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            password,
        }
    }
}

/// Client-trusted fields of a user being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub password: Password,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_forces_user_role() {
        let user = User::register(
            7,
            NewUser {
                name: "Ada".to_string(),
                password: Password::new("x"),
            },
        );

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Ada");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("hunter2");
        let rendered = format!("{:?}", password);

        assert_eq!(rendered, "Password(***)");
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_user_debug_hides_password() {
        let user = User::with_role(1, "Grace", Role::Admin, Password::new("s3cret"));

        assert!(!format!("{:?}", user).contains("s3cret"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
