pub mod api;
pub mod capture;
pub mod config;
pub mod http;
pub mod session;

pub use api::{ApiClient, InterviewApi, SaveSessionRequest, SessionSummary};
pub use capture::{
    CaptureController, CaptureState, RecognitionEvent, ResultBatch, SpeechRecognizer,
};
pub use config::Config;
pub use http::{create_router, AppState};
pub use session::{
    Difficulty, Evaluation, InterviewOrchestrator, Question, QuestionKind, ScoreReport,
    SessionSnapshot, Stage,
};
