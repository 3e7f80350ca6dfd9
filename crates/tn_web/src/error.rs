//! Conversion from domain errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tn_core::Error;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// Wraps [`tn_core::Error`] so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.0.error_code(),
                message: self.0.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_bad_request() {
        let err = ApiError::from(Error::InvalidFilter { field: "category" });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_failures_are_server_errors() {
        let wrapped = Error::UpstreamFetch {
            field: "genre",
            value: "ai".to_string(),
            page: 1,
            source: Box::new(Error::EmptyBody),
        };
        assert_eq!(ApiError::from(wrapped).status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let stalled = Error::StalledPagination { page: 2, processed: 1, total: 3 };
        assert_eq!(ApiError::from(stalled).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
