use serde::{Deserialize, Serialize};

use crate::session::{Difficulty, Evaluation, Question};

/// Request body for POST /api/parse-job-description
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseJobDescriptionRequest {
    pub job_description: String,
}

/// Skills extracted from a job description, in the service's order
#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// Request body for POST /api/generate-questions
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub job_description: String,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Request body for POST /api/evaluate-answer
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub question: String,
    pub answer: String,
    /// Full job description, sent on every call to disambiguate the answer
    pub job_context: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub evaluation: Evaluation,
}

/// Finished session payload persisted by the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionRequest {
    pub job_description: String,
    pub questions: Vec<Question>,
    pub answers: Vec<String>,
    pub scores: Vec<Evaluation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveSessionResponse {
    pub session_id: i64,
}

/// Summary of a past session, as listed by the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: i64,
    /// Possibly truncated by the service for display
    pub job_description: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListSessionsResponse {
    pub sessions: Vec<SessionSummary>,
}
