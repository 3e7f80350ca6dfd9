//! Request extractors that report rejections in the same JSON shape as handler errors.

use axum::extract::{rejection::JsonRejection, FromRequest};
use tn_core::Error;

use crate::error::ApiError;

/// `axum::Json`, but a missing content type or an unparsable body becomes a 400 `invalid_request`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::InvalidRequest(rejection.body_text()))
    }
}
