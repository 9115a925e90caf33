use serde::Serialize;

use super::model::Evaluation;

/// Aggregate performance over all evaluated answers.
///
/// Computed at read time from the accumulated evaluations, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Mean of the per-answer overall scores
    pub overall_score: f64,

    pub technical_accuracy: f64,
    pub communication_clarity: f64,
    pub depth_of_knowledge: f64,
    pub contextual_understanding: f64,
    pub problem_solving: f64,

    /// Number of evaluations the means were taken over
    pub evaluated_answers: usize,
}

impl ScoreReport {
    /// Mean of every scoring dimension across the given evaluations.
    ///
    /// An empty slice yields all-zero scores rather than dividing by zero.
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        let count = evaluations.len();
        let mean = |metric: fn(&Evaluation) -> f64| -> f64 {
            if count == 0 {
                0.0
            } else {
                evaluations.iter().map(metric).sum::<f64>() / count as f64
            }
        };

        Self {
            overall_score: mean(|e| e.overall_score),
            technical_accuracy: mean(|e| e.technical_accuracy),
            communication_clarity: mean(|e| e.communication_clarity),
            depth_of_knowledge: mean(|e| e.depth_of_knowledge),
            contextual_understanding: mean(|e| e.contextual_understanding),
            problem_solving: mean(|e| e.problem_solving),
            evaluated_answers: count,
        }
    }
}
