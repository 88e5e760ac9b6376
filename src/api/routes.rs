//! API route configuration, one router per service.

use crate::api::handlers::{
    create_user_handler, echo_user_handler, get_user_handler, healthcheck_handler,
    redirect_handler, shorten_handler,
};
use crate::state::{ShortenerState, UserStoreState};
use axum::{
    Router,
    routing::{get, post},
};

/// URL shortener routes.
///
/// # Endpoints
///
/// - `POST /shorten`  - Create a short code for a URL
/// - `GET  /{code}`   - Permanent redirect to the stored URL
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
}

/// User store routes.
///
/// # Endpoints
///
/// - `POST /users`       - Create a user (role forced to `user`)
/// - `GET  /users/{id}`  - Fetch a user by ID
pub fn user_routes() -> Router<UserStoreState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
}

/// Healthcheck service routes.
///
/// # Endpoints
///
/// - `GET /healthcheck` - Liveness text
/// - `GET /users/{id}`  - Echo of the path value
pub fn healthcheck_routes() -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck_handler))
        .route("/users/{id}", get(echo_user_handler))
}
