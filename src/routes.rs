//! Top-level router configuration.
//!
//! # Services
//!
//! - **shortener** - `POST /shorten`, `GET /{code}`
//! - **users** - `POST /users`, `GET /users/{id}`
//! - **healthcheck** - `GET /healthcheck`, `GET /users/{id}`
//!
//! # Middleware (outermost first)
//!
//! - **Request ID** - Assign `x-request-id` when missing
//! - **Tracing** - Structured request/response logging
//! - **Request ID propagation** - Echo `x-request-id` on the response
//! - **Panic recovery** - Handler panics become `500`
//! - **Timeout** - `408` once the request timeout elapses
//! - **Body limit** - Larger bodies are rejected with `413`
//!
//! Unmatched routes get the plain-text `404 page not found` page.

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{recover, request_id};
use crate::config::Config;
use crate::state::{ShortenerState, UserStoreState};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// URL shortener application.
pub fn shortener_app(state: ShortenerState, config: &Config) -> Router {
    with_middleware(api::routes::shortener_routes().with_state(state), config)
}

/// User store application.
pub fn user_store_app(state: UserStoreState, config: &Config) -> Router {
    with_middleware(api::routes::user_routes().with_state(state), config)
}

/// Healthcheck application.
pub fn healthcheck_app(config: &Config) -> Router {
    with_middleware(api::routes::healthcheck_routes(), config)
}

/// Adds the fallback page and the shared middleware stack.
pub fn with_middleware(router: Router, config: &Config) -> Router {
    router
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(api::middleware::tracing::layer())
                .layer(request_id::propagate_layer())
                .layer(recover::layer())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout(),
                )),
        )
}
