// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ErrorResponse, FailureResponse};
use crate::services::reply::ReplyError;

pub const GENERATION_FAILED: &str = "Failed to generate response";

/// Errors surfaced at the HTTP boundary. Provider detail never reaches the
/// body; it is logged where the failure is caught.
#[derive(Debug, Error)]
pub enum AppError {
    /// 400 `{"error": ..}`
    #[error("bad request: {0}")]
    BadRequest(String),

    /// 500 `{"error": "Failed to generate response"}`
    #[error("generation failed")]
    Generation,

    /// 500 `{"success": false, "error": ..}`, the dashboard endpoints' envelope
    #[error("operation failed: {0}")]
    Operation(&'static str),
}

impl From<ReplyError> for AppError {
    fn from(err: ReplyError) -> Self {
        match err {
            ReplyError::Validation(msg) => AppError::BadRequest(msg.to_string()),
            ReplyError::Generation(_) => AppError::Generation,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            AppError::Generation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: GENERATION_FAILED.to_string() }),
            )
                .into_response(),
            AppError::Operation(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse { success: false, error: error.to_string() }),
            )
                .into_response(),
        }
    }
}
