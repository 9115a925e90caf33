use serde::{Deserialize, Serialize};

/// Coarse step of the interview flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for the candidate to submit a job description
    CollectingJobDescription,
    /// Skills extracted; waiting for a difficulty choice
    SkillsReady,
    /// Working through the generated questions
    Interviewing,
    /// All questions answered; the report is available
    Complete,
}

/// Difficulty requested for generated questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Question category as labeled by the interview service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Technical,
    Behavioral,
}

/// A single generated interview question. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Question text
    #[serde(rename = "question")]
    pub text: String,

    /// Technical or behavioral
    #[serde(rename = "type")]
    pub kind: QuestionKind,

    /// The extracted skill this question probes
    pub skill: String,
}

/// Scored assessment of one answer, as returned by the interview service.
///
/// All scores are on a 0-10 scale. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub overall_score: f64,
    pub technical_accuracy: f64,
    pub communication_clarity: f64,
    pub depth_of_knowledge: f64,
    pub contextual_understanding: f64,
    pub problem_solving: f64,

    /// What the answer did well
    pub strengths: Vec<String>,

    /// Where the answer fell short
    pub improvements: Vec<String>,

    /// Free-form constructive feedback
    pub feedback: String,
}
