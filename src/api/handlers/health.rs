//! Handlers for the healthcheck service.

use axum::extract::Path;

/// Liveness check.
///
/// # Endpoint
///
/// `GET /healthcheck`
pub async fn healthcheck_handler() -> &'static str {
    "Server is running."
}

/// Echoes the `{id}` path segment back as plain text.
///
/// # Endpoint
///
/// `GET /users/{id}`
pub async fn echo_user_handler(Path(id): Path<String>) -> String {
    id
}
