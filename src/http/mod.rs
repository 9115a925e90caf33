//! HTTP API for external control (the interview UI)
//!
//! This module provides a REST API for driving the interview flow:
//! - POST /session/job-description - Submit a job description
//! - POST /session/questions - Choose a difficulty and generate questions
//! - POST /session/answer - Submit an answer for the current question
//! - POST /session/back - Step back one stage
//! - POST /session/restart - Discard the finished session
//! - GET /session - Current flow snapshot
//! - GET /session/report - Aggregate score report
//! - GET /sessions - Past session summaries (remote pass-through)
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
