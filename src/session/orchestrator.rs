use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::model::{Difficulty, Evaluation, Question, Stage};
use super::report::ScoreReport;
use crate::api::{InterviewApi, SaveSessionRequest};

/// Mutable interview state, guarded by the orchestrator's lock.
struct FlowState {
    stage: Stage,
    session_id: String,
    started_at: DateTime<Utc>,
    job_description: String,
    skills: Vec<String>,
    questions: Vec<Question>,
    current_question: usize,
    answers: Vec<String>,
    evaluations: Vec<Evaluation>,

    /// Human-readable failure for the current stage, if any
    error: Option<String>,

    /// A remote call is outstanding; triggers are rejected until it lands
    busy: bool,

    /// Bumped by back()/restart(); responses from an older epoch are dropped
    epoch: u64,
}

impl FlowState {
    fn fresh() -> Self {
        Self {
            stage: Stage::CollectingJobDescription,
            session_id: format!("interview-{}", uuid::Uuid::new_v4()),
            started_at: Utc::now(),
            job_description: String::new(),
            skills: Vec::new(),
            questions: Vec::new(),
            current_question: 0,
            answers: Vec::new(),
            evaluations: Vec::new(),
            error: None,
            busy: false,
            epoch: 0,
        }
    }
}

/// Point-in-time view of the interview flow for presentation layers
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub stage: Stage,
    pub started_at: DateTime<Utc>,
    pub job_description: String,
    pub skills: Vec<String>,
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub answers: Vec<String>,
    pub evaluations: Vec<Evaluation>,
    pub busy: bool,
    pub error: Option<String>,
}

/// Drives one interview flow: job description → skills → questions → answers
/// → report.
///
/// All methods take `&self`; state lives behind a lock so the orchestrator can
/// be shared with a presentation layer. Exactly one remote call is in flight
/// at a time: triggers arriving while busy are rejected (never queued), and a
/// response that lands after the user navigated away is dropped instead of
/// being applied to a stale stage.
///
/// Remote failures never escape: each resolves into a stage-scoped message in
/// the snapshot, with session state left exactly as it was before the call.
pub struct InterviewOrchestrator {
    api: Arc<dyn InterviewApi>,
    state: Mutex<FlowState>,
}

impl InterviewOrchestrator {
    pub fn new(api: Arc<dyn InterviewApi>) -> Self {
        Self {
            api,
            state: Mutex::new(FlowState::fresh()),
        }
    }

    /// Submit the job description and extract skills from it.
    ///
    /// Empty and whitespace-only input is rejected locally, without a remote
    /// call. On success the flow moves to `SkillsReady` with the returned
    /// skills stored verbatim, order preserved.
    pub async fn submit_job_description(&self, input: &str) {
        let trimmed = input.trim().to_string();

        let epoch = {
            let mut s = self.state.lock().await;
            if s.stage != Stage::CollectingJobDescription {
                warn!("submit_job_description ignored in stage {:?}", s.stage);
                return;
            }
            if trimmed.is_empty() {
                s.error = Some("Please enter a job description.".to_string());
                return;
            }
            if s.busy {
                warn!("submit_job_description rejected: a request is already in flight");
                return;
            }
            s.busy = true;
            s.error = None;
            s.epoch
        };

        let result = self.api.parse_job_description(&trimmed).await;

        let mut s = self.state.lock().await;
        s.busy = false;
        if s.epoch != epoch {
            debug!("parse-job-description response arrived after navigation, dropped");
            return;
        }
        match result {
            Ok(skills) => {
                info!("Extracted {} skills from job description", skills.len());
                s.job_description = trimmed;
                s.skills = skills;
                s.stage = Stage::SkillsReady;
            }
            Err(e) => {
                error!("parse-job-description failed: {:#}", e);
                s.error = Some("Failed to parse job description. Please try again.".to_string());
            }
        }
    }

    /// Generate interview questions at the chosen difficulty.
    ///
    /// On success the flow enters `Interviewing` at question 0 with a fresh
    /// answer record.
    pub async fn choose_difficulty(&self, difficulty: Difficulty) {
        let (epoch, job_description, skills) = {
            let mut s = self.state.lock().await;
            if s.stage != Stage::SkillsReady {
                warn!("choose_difficulty ignored in stage {:?}", s.stage);
                return;
            }
            if s.busy {
                warn!("choose_difficulty rejected: a request is already in flight");
                return;
            }
            s.busy = true;
            s.error = None;
            (s.epoch, s.job_description.clone(), s.skills.clone())
        };

        let result = self
            .api
            .generate_questions(&job_description, &skills, difficulty)
            .await;

        let mut s = self.state.lock().await;
        s.busy = false;
        if s.epoch != epoch {
            debug!("generate-questions response arrived after navigation, dropped");
            return;
        }
        match result {
            Ok(questions) if questions.is_empty() => {
                warn!("generate-questions returned an empty question list");
                s.error = Some("Failed to generate questions. Please try again.".to_string());
            }
            Ok(questions) => {
                info!("Generated {} questions at {:?} difficulty", questions.len(), difficulty);
                s.questions = questions;
                s.current_question = 0;
                // A new question set starts a fresh attempt; answers kept from
                // a previous set would no longer line up with their questions.
                s.answers.clear();
                s.evaluations.clear();
                s.stage = Stage::Interviewing;
            }
            Err(e) => {
                error!("generate-questions failed: {:#}", e);
                s.error = Some("Failed to generate questions. Please try again.".to_string());
            }
        }
    }

    /// Submit the answer to the current question for evaluation.
    ///
    /// On success the answer and its evaluation are appended together, keeping
    /// the answer/evaluation/question sequences index-aligned. Answering the
    /// last question saves the session best-effort and moves the flow to
    /// `Complete`. On failure nothing moves, so the same transcript can be
    /// resubmitted.
    pub async fn submit_answer(&self, transcript: &str) {
        let answer = transcript.trim().to_string();

        let (epoch, question, job_description) = {
            let mut s = self.state.lock().await;
            if s.stage != Stage::Interviewing {
                warn!("submit_answer ignored in stage {:?}", s.stage);
                return;
            }
            if answer.is_empty() {
                s.error = Some("Cannot submit an empty answer.".to_string());
                return;
            }
            if s.busy {
                warn!("submit_answer rejected: a request is already in flight");
                return;
            }
            let question = match s.questions.get(s.current_question) {
                Some(q) => q.text.clone(),
                None => {
                    warn!("no question at index {}, ignoring answer", s.current_question);
                    return;
                }
            };
            s.busy = true;
            s.error = None;
            (s.epoch, question, s.job_description.clone())
        };

        let result = self
            .api
            .evaluate_answer(&question, &answer, &job_description)
            .await;

        let mut s = self.state.lock().await;
        s.busy = false;
        if s.epoch != epoch {
            debug!("evaluate-answer response arrived after navigation, dropped");
            return;
        }
        match result {
            Ok(evaluation) => {
                s.answers.push(answer);
                s.evaluations.push(evaluation);
                if s.current_question + 1 < s.questions.len() {
                    s.current_question += 1;
                } else {
                    info!("All {} questions answered, interview complete", s.questions.len());
                    self.spawn_save(&s);
                    s.stage = Stage::Complete;
                }
            }
            Err(e) => {
                error!("evaluate-answer failed: {:#}", e);
                s.error = Some("Failed to evaluate answer. Please try again.".to_string());
            }
        }
    }

    /// Persist the finished session in the background.
    ///
    /// Failures are logged and never surfaced: the report is computed from
    /// in-memory data, so a lost save must not keep the user from it.
    fn spawn_save(&self, s: &FlowState) {
        let api = Arc::clone(&self.api);
        let request = SaveSessionRequest {
            job_description: s.job_description.clone(),
            questions: s.questions.clone(),
            answers: s.answers.clone(),
            scores: s.evaluations.clone(),
        };

        tokio::spawn(async move {
            if let Err(e) = api.save_session(&request).await {
                warn!("save-session failed: {:#}", e);
            }
        });
    }

    /// Step back one stage.
    ///
    /// Leaving a stage invalidates any response still in flight for it; the
    /// response is dropped when it lands. Accumulated answers survive going
    /// back from `Interviewing`; they are discarded only when a new question
    /// set is generated.
    pub async fn back(&self) {
        let mut s = self.state.lock().await;
        match s.stage {
            Stage::SkillsReady => {
                s.stage = Stage::CollectingJobDescription;
                s.skills.clear();
            }
            Stage::Interviewing => {
                s.stage = Stage::SkillsReady;
            }
            _ => {
                warn!("back ignored in stage {:?}", s.stage);
                return;
            }
        }
        s.error = None;
        s.epoch += 1;
    }

    /// Discard the finished session and start over from a blank one.
    pub async fn restart(&self) {
        let mut s = self.state.lock().await;
        if s.stage != Stage::Complete {
            warn!("restart ignored in stage {:?}", s.stage);
            return;
        }
        let epoch = s.epoch + 1;
        *s = FlowState::fresh();
        s.epoch = epoch;
        info!("Session restarted as {}", s.session_id);
    }

    /// Point-in-time view of the flow for presentation.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let s = self.state.lock().await;
        SessionSnapshot {
            session_id: s.session_id.clone(),
            stage: s.stage,
            started_at: s.started_at,
            job_description: s.job_description.clone(),
            skills: s.skills.clone(),
            questions: s.questions.clone(),
            current_question: s.current_question,
            answers: s.answers.clone(),
            evaluations: s.evaluations.clone(),
            busy: s.busy,
            error: s.error.clone(),
        }
    }

    /// Aggregate performance report over the accumulated evaluations.
    pub async fn report(&self) -> ScoreReport {
        let s = self.state.lock().await;
        ScoreReport::from_evaluations(&s.evaluations)
    }
}
