//! Application error type and its HTTP mapping.
//!
//! Every failure inside a handler becomes an [`AppError`], which renders
//! itself as a response. Nothing propagates past the request boundary.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::envelope::Envelope;
use crate::domain::repositories::StoreError;

/// Body of the plain-text not-found page.
pub const NOT_FOUND_PAGE: &str = "404 page not found";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body is not valid JSON for the expected shape.
    #[error("invalid request body")]
    Decode { reason: String },

    /// Input decoded but is semantically invalid.
    #[error("{message}")]
    Validation { message: String },

    /// Unknown key, reported as a structured error.
    #[error("{message}")]
    NotFound { message: String },

    /// Unknown key or route, reported as an unstructured page so callers
    /// cannot tell why nothing was found.
    #[error("page not found")]
    NotFoundPage,

    #[error("request body too large")]
    PayloadTooLarge,

    /// Unexpected failure. Logged; the caller only sees a generic message.
    #[error("internal server error")]
    Internal { message: String },
}

impl AppError {
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Decode { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::NotFoundPage => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::NotFoundPage => {
                return (
                    status,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    NOT_FOUND_PAGE,
                )
                    .into_response();
            }
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Request failed with internal error");
            }
            AppError::Decode { reason } => {
                tracing::debug!(reason = %reason, "Rejected undecodable request body");
            }
            _ => {}
        }

        (status, Json(Envelope::<()>::error(self.to_string()))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();

        AppError::validation(messages.join("; "))
    }
}
