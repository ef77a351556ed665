//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"detail": ..., "timestamp": ...}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

use crate::inventory_actor::InventoryError;
use crate::user_actor::UserError;

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// The detail is logged, never sent to the caller.
    #[error("Internal server error")]
    Internal(String),
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub timestamp: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(cause) = &self {
            error!(%cause, "Request failed");
        }
        let body = ErrorResponse {
            detail: self.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound("User not found".into()),
            // Users report duplicate emails as 400.
            UserError::AlreadyExists(_) => ApiError::BadRequest("Email already registered".into()),
            UserError::ValidationError(msg) => ApiError::BadRequest(msg),
            UserError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::NotFound(_) => ApiError::NotFound("Item not found".into()),
            InventoryError::AlreadyExists(_) => {
                ApiError::Conflict("An existing item already exists".into())
            }
            InventoryError::ValidationError(msg) => ApiError::BadRequest(msg),
            InventoryError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_statuses() {
        let cases = [
            (UserError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (UserError::AlreadyExists("a@b.c".into()), StatusCode::BAD_REQUEST),
            (UserError::ValidationError("bad".into()), StatusCode::BAD_REQUEST),
            (
                UserError::ActorCommunicationError("Actor closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_inventory_conflict_is_409() {
        let err = ApiError::from(InventoryError::AlreadyExists("x".into()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "An existing item already exists");
    }

    #[test]
    fn test_internal_detail_hidden() {
        let err = ApiError::Internal("Actor closed".into());
        assert_eq!(err.to_string(), "Internal server error");
    }
}
