//! Fallback for unmatched routes.

use crate::error::AppError;

/// Plain `404 page not found` for any unknown route.
pub async fn not_found_handler() -> AppError {
    AppError::NotFoundPage
}
