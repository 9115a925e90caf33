//! Voice capture for one interview question
//!
//! This module provides the `CaptureController` abstraction that manages:
//! - The lifecycle of a continuous speech recognition stream (start/stop)
//! - Final vs. interim transcript accumulation
//! - Automatic restart when the recognizer ends the stream on its own
//! - Hand-off of the frozen transcript to the orchestrator, at most once

mod controller;
mod recognizer;

pub use controller::{CaptureController, CaptureState};
pub use recognizer::{RecognitionEvent, ResultBatch, SpeechRecognizer};
