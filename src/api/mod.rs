//! Remote interview service client
//!
//! All NLP work (skill extraction, question generation, answer scoring) lives
//! in a remote service reached over plain request/response HTTP. This module
//! provides the wire types, the `InterviewApi` trait the orchestrator talks
//! to, and the production `ApiClient` implementation.

mod client;
mod messages;

pub use client::{ApiClient, InterviewApi};
pub use messages::{
    EvaluateAnswerRequest, EvaluationResponse, GenerateQuestionsRequest, ListSessionsResponse,
    ParseJobDescriptionRequest, QuestionsResponse, SaveSessionRequest, SaveSessionResponse,
    SessionSummary, SkillsResponse,
};
