//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::ShortenerState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `308 Permanent Redirect`. An unknown code, or a segment that does
/// not decode to UTF-8, gets the same plain `404 page not found` page as an
/// unknown route.
pub async fn redirect_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<ShortenerState>,
) -> Result<Redirect, AppError> {
    let Path(code) = code.map_err(|_| AppError::NotFoundPage)?;
    let link = state
        .link_service
        .resolve(&code)
        .await
        .ok_or(AppError::NotFoundPage)?;

    Ok(Redirect::permanent(&link.target_url))
}
