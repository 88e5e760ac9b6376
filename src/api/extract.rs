//! Request body extractor with the service's error mapping.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor.
///
/// Unlike [`axum::Json`], it does not require a `Content-Type` header and
/// decodes only the first JSON value, ignoring anything after it. Its
/// rejections are [`AppError`]s:
///
/// - body over the configured limit → [`AppError::PayloadTooLarge`] (413)
/// - unreadable or undecodable body → [`AppError::Decode`] (422)
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::decode(rejection.body_text())
            }
        })?;

        match serde_json::Deserializer::from_slice(&bytes).into_iter::<T>().next() {
            Some(Ok(value)) => Ok(JsonBody(value)),
            Some(Err(e)) => Err(AppError::decode(e.to_string())),
            None => Err(AppError::decode("empty body")),
        }
    }
}
