use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use super::messages::{
    EvaluateAnswerRequest, EvaluationResponse, GenerateQuestionsRequest, ListSessionsResponse,
    ParseJobDescriptionRequest, QuestionsResponse, SaveSessionRequest, SaveSessionResponse,
    SessionSummary, SkillsResponse,
};
use crate::config::RemoteApiConfig;
use crate::session::{Difficulty, Evaluation, Question};

/// The remote interview service, as seen by the orchestrator.
///
/// The production implementation is `ApiClient`; tests substitute scripted
/// fakes. Each method maps to one request/response exchange.
#[async_trait::async_trait]
pub trait InterviewApi: Send + Sync {
    /// Extract skills from a job description.
    async fn parse_job_description(&self, job_description: &str) -> Result<Vec<String>>;

    /// Generate interview questions for the extracted skills.
    async fn generate_questions(
        &self,
        job_description: &str,
        skills: &[String],
        difficulty: Difficulty,
    ) -> Result<Vec<Question>>;

    /// Score one answer against its question, with the job description as context.
    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        job_context: &str,
    ) -> Result<Evaluation>;

    /// Persist a finished session. Best-effort; the caller decides whether
    /// failure matters.
    async fn save_session(&self, session: &SaveSessionRequest) -> Result<()>;

    /// List summaries of past sessions.
    async fn list_sessions(&self) -> Result<Vec<SessionSummary>>;
}

/// HTTP client for the remote interview service
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &RemoteApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} returned {}: {}", url, status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{} returned {}: {}", url, status, body);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))
    }
}

#[async_trait::async_trait]
impl InterviewApi for ApiClient {
    async fn parse_job_description(&self, job_description: &str) -> Result<Vec<String>> {
        let request = ParseJobDescriptionRequest {
            job_description: job_description.to_string(),
        };

        let response: SkillsResponse = self.post_json("/api/parse-job-description", &request).await?;

        info!("Parsed job description into {} skills", response.skills.len());

        Ok(response.skills)
    }

    async fn generate_questions(
        &self,
        job_description: &str,
        skills: &[String],
        difficulty: Difficulty,
    ) -> Result<Vec<Question>> {
        let request = GenerateQuestionsRequest {
            job_description: job_description.to_string(),
            skills: skills.to_vec(),
            difficulty,
        };

        let response: QuestionsResponse = self.post_json("/api/generate-questions", &request).await?;

        info!(
            "Generated {} questions at {:?} difficulty",
            response.questions.len(),
            difficulty
        );

        Ok(response.questions)
    }

    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        job_context: &str,
    ) -> Result<Evaluation> {
        let request = EvaluateAnswerRequest {
            question: question.to_string(),
            answer: answer.to_string(),
            job_context: job_context.to_string(),
        };

        let response: EvaluationResponse = self.post_json("/api/evaluate-answer", &request).await?;

        info!(
            "Answer evaluated: overall score {:.1}",
            response.evaluation.overall_score
        );

        Ok(response.evaluation)
    }

    async fn save_session(&self, session: &SaveSessionRequest) -> Result<()> {
        let response: SaveSessionResponse = self.post_json("/api/save-session", session).await?;

        info!("Session saved as {}", response.session_id);

        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<SessionSummary>> {
        let response: ListSessionsResponse = self.get_json("/api/sessions").await?;

        Ok(response.sessions)
    }
}
