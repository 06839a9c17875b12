use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    message::{QuizResult, ReplyRequest, ReplyResponse, field, new_id},
    routes::practice::accept,
    services::{reply::MESSAGE_REQUIRED, timestamp},
    state::SharedState,
};

const QUIZ_FAILED: &str = "Failed to process quiz";

pub async fn reply_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ReplyRequest>, JsonRejection>,
) -> Result<Json<ReplyResponse>, AppError> {
    // An unreadable body has no message in it.
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "unreadable reply request");
        AppError::BadRequest(MESSAGE_REQUIRED.to_string())
    })?;

    let response = state.replies.generate_reply(request).await?;
    Ok(Json(response))
}

pub async fn quiz_handler(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuizResult>, AppError> {
    let submission = accept(payload, QUIZ_FAILED)?;

    let Some(answers) = field(&submission, "answers").as_object() else {
        error!(answers = %field(&submission, "answers"), "Error processing quiz: answers missing");
        return Err(AppError::Operation(QUIZ_FAILED));
    };

    info!(
        quiz_title = %field(&submission, "quizTitle"),
        answers = answers.len(),
        timestamp = %timestamp(),
        "Quiz submission received"
    );

    let personalized_result = state
        .quizzes
        .personalize(answers)
        .await
        .map_err(|_| AppError::Operation(QUIZ_FAILED))?;

    Ok(Json(QuizResult {
        success: true,
        personalized_result,
        quiz_id: new_id("quiz"),
        submission_id: new_id("sub"),
        data: submission,
    }))
}
