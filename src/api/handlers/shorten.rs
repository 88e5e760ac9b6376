//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::shorten::ShortenRequest;
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::ShortenerState;

/// Creates a short code for a URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "data": "aZ3kP9qX" }
/// ```
///
/// # Errors
///
/// - 422 if the body is not valid JSON
/// - 400 `{"error":"invalid URL"}` if the URL lacks a scheme or host
/// - 413 if the body exceeds the size limit
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    JsonBody(payload): JsonBody<ShortenRequest>,
) -> Result<(StatusCode, Json<Envelope<String>>), AppError> {
    let link = state.link_service.shorten(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(Envelope::data(link.code))))
}
