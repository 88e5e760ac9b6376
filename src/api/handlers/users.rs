//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::user::{CreateUserRequest, UserResponse, parse_user_id};
use crate::api::extract::JsonBody;
use crate::application::services::user_service::user_not_found;
use crate::error::AppError;
use crate::state::UserStoreState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "role": "root", "password": "x" }
/// ```
///
/// # Response
///
/// `201 Created`. The ID is server-assigned and the role is always `user`.
///
/// ```json
/// { "data": { "id": "3", "name": "Ada", "role": "user" } }
/// ```
///
/// # Errors
///
/// - 422 if the body is not valid JSON
/// - 400 if `name` is empty
/// - 413 if the body exceeds the size limit
pub async fn create_user_handler(
    State(state): State<UserStoreState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<Envelope<UserResponse>>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.into_new_user())
        .await?;

    Ok((StatusCode::CREATED, Json(Envelope::data(user.into()))))
}

/// Returns a user by ID.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 `{"error":"User not found."}` if `id` is not a positive
/// decimal integer or no such user exists.
pub async fn get_user_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<UserStoreState>,
) -> Result<Json<Envelope<UserResponse>>, AppError> {
    let id = id
        .ok()
        .and_then(|Path(id)| parse_user_id(&id))
        .ok_or_else(user_not_found)?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(Envelope::data(user.into())))
}
