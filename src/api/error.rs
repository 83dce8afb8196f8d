//! Maps handler failures onto HTTP responses.
//!
//! Not-found cases become `404` with the store's message, malformed payloads
//! become `400`, and everything else is logged and returned as an opaque `500`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::handlers::types::ErrorResponse;
use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Store(err) if err.is_not_found() => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Store(err) => {
                error!("Storage failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Level;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::from(StoreError::NotFound(Level::Domain)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(StoreError::ParentNotFound(Level::Schema)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn backend_failures_map_to_500() {
        let response =
            ApiError::from(StoreError::Backend("lock poisoned".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::from(StoreError::Database(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("missing field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
