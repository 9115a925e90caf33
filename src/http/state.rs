use std::sync::Arc;

use crate::api::InterviewApi;
use crate::session::InterviewOrchestrator;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The single live interview flow
    pub orchestrator: Arc<InterviewOrchestrator>,

    /// Remote service client, for read-only pass-throughs
    pub api: Arc<dyn InterviewApi>,
}

impl AppState {
    pub fn new(orchestrator: Arc<InterviewOrchestrator>, api: Arc<dyn InterviewApi>) -> Self {
        Self { orchestrator, api }
    }
}
