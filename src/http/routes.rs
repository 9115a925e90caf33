use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Interview flow control
        .route(
            "/session/job-description",
            post(handlers::submit_job_description),
        )
        .route("/session/questions", post(handlers::choose_difficulty))
        .route("/session/answer", post(handlers::submit_answer))
        .route("/session/back", post(handlers::back))
        .route("/session/restart", post(handlers::restart))
        // Flow queries
        .route("/session", get(handlers::get_session))
        .route("/session/report", get(handlers::get_report))
        // Session history pass-through
        .route("/sessions", get(handlers::list_sessions))
        // The interview UI is served from another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
