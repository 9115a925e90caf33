//! Interview session orchestration
//!
//! This module provides the `InterviewOrchestrator` abstraction that manages:
//! - The stage machine (job description → skills → questions → answers → report)
//! - The four remote calls gating stage transitions
//! - Per-question answer and evaluation accumulation
//! - Read-time score aggregation for the final report

mod model;
mod orchestrator;
mod report;

pub use model::{Difficulty, Evaluation, Question, QuestionKind, Stage};
pub use orchestrator::{InterviewOrchestrator, SessionSnapshot};
pub use report::ScoreReport;
