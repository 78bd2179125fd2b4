//! Error rendering for the HTTP layer.

use crate::todo::services::TodoServiceError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Message returned for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

/// An error ready to be rendered as `{"error": ...}` with a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a `400 Bad Request` error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates the `404 Not Found` error for unmatched routes.
    #[must_use]
    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "route not found")
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the message placed in the body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Maps a service error to its HTTP status.
#[must_use]
pub const fn status_for(err: &TodoServiceError) -> StatusCode {
    match err {
        TodoServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        TodoServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        TodoServiceError::ResourceExhausted(_) | TodoServiceError::StorageFailure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        let status = status_for(&err);
        if !status.is_server_error() {
            return Self::new(status, err.to_string());
        }

        tracing::error!(error = %err, causes = %source_chain(&err), "todo operation failed");
        Self::new(status, INTERNAL_ERROR_MESSAGE)
    }
}

/// Joins the `Display` text of every source below `err` with `": "`.
fn source_chain(err: &(dyn std::error::Error + 'static)) -> String {
    std::iter::successors(err.source(), |&source| source.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
