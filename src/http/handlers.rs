use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::state::AppState;
use crate::session::Difficulty;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitJobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChooseDifficultyRequest {
    pub difficulty: Difficulty,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /session/job-description
/// Submit a job description for skill extraction
pub async fn submit_job_description(
    State(state): State<AppState>,
    Json(req): Json<SubmitJobDescriptionRequest>,
) -> impl IntoResponse {
    state
        .orchestrator
        .submit_job_description(&req.job_description)
        .await;

    Json(state.orchestrator.snapshot().await)
}

/// POST /session/questions
/// Choose a difficulty and generate questions
pub async fn choose_difficulty(
    State(state): State<AppState>,
    Json(req): Json<ChooseDifficultyRequest>,
) -> impl IntoResponse {
    state.orchestrator.choose_difficulty(req.difficulty).await;

    Json(state.orchestrator.snapshot().await)
}

/// POST /session/answer
/// Submit an answer for the current question
pub async fn submit_answer(
    State(state): State<AppState>,
    Json(req): Json<SubmitAnswerRequest>,
) -> impl IntoResponse {
    state.orchestrator.submit_answer(&req.answer).await;

    Json(state.orchestrator.snapshot().await)
}

/// POST /session/back
/// Step back one stage
pub async fn back(State(state): State<AppState>) -> impl IntoResponse {
    state.orchestrator.back().await;

    Json(state.orchestrator.snapshot().await)
}

/// POST /session/restart
/// Discard the finished session and start over
pub async fn restart(State(state): State<AppState>) -> impl IntoResponse {
    state.orchestrator.restart().await;

    Json(state.orchestrator.snapshot().await)
}

/// GET /session
/// Current flow snapshot
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.orchestrator.snapshot().await)
}

/// GET /session/report
/// Aggregate score report over the evaluated answers
pub async fn get_report(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.orchestrator.report().await)
}

/// GET /sessions
/// Past session summaries, straight from the remote service
pub async fn list_sessions(State(state): State<AppState>) -> impl IntoResponse {
    match state.api.list_sessions().await {
        Ok(sessions) => (StatusCode::OK, Json(sessions)).into_response(),
        Err(e) => {
            error!("list-sessions failed: {:#}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to load sessions".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
