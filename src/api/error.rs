use crate::errors::AppError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::OutsideWindow { .. }
            | AppError::AlreadyCheckedIn { .. }
            | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the log.
        let message = if self.is_rejection() {
            self.to_string()
        } else {
            error!(error = %self, "request failed");
            "An error occurred while processing the request".to_string()
        };

        let body = FailureBody {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}
