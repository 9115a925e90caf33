use tracing::{debug, warn};

use super::recognizer::{RecognitionEvent, ResultBatch, SpeechRecognizer};

/// Capture lifecycle states for one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Speech capture is absent in this environment; recording is disabled
    Unsupported,
    /// Nothing captured yet (or reset for a new attempt)
    Idle,
    /// Armed: a live stream is producing (or reopening) transcript
    Listening,
    /// Recording stopped; the transcript is locked as the answer candidate
    Frozen,
}

/// Owns one question's voice capture: a continuous recognition stream whose
/// output accumulates into a live transcript, frozen on stop and handed off
/// at most once.
///
/// The recognizer tends to end its stream on its own (silence timeouts); while
/// the controller is still Listening, a clean end triggers exactly one restart
/// request, debounced by `restart_pending` until the recognizer confirms with
/// `Started`. An explicit stop always wins the race: it leaves Listening
/// synchronously, so any later end event finds nothing to restart.
pub struct CaptureController {
    recognizer: Box<dyn SpeechRecognizer>,

    state: CaptureState,

    /// Final segments accumulated this attempt, in arrival order
    final_segments: Vec<String>,

    /// Provisional tail, replaced wholesale by each result batch
    interim_segments: Vec<String>,

    /// A restart was requested after an unexpected end and has not been
    /// confirmed by `Started` yet
    restart_pending: bool,

    error: Option<String>,
}

impl CaptureController {
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        let (state, error) = if recognizer.is_available() {
            (CaptureState::Idle, None)
        } else {
            warn!("{}: speech recognition unavailable", recognizer.name());
            (
                CaptureState::Unsupported,
                Some("Speech recognition is not supported in this environment".to_string()),
            )
        };

        Self {
            recognizer,
            state,
            final_segments: Vec::new(),
            interim_segments: Vec::new(),
            restart_pending: false,
            error,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == CaptureState::Listening
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Live transcript: all final text so far followed by the pending interim
    /// tail, chronological.
    pub fn live_transcript(&self) -> String {
        let mut transcript = String::new();
        for segment in self.final_segments.iter().chain(self.interim_segments.iter()) {
            transcript.push_str(segment);
        }
        transcript
    }

    /// The locked answer candidate, present only after recording has stopped.
    pub fn frozen_transcript(&self) -> Option<String> {
        (self.state == CaptureState::Frozen).then(|| self.live_transcript())
    }

    /// Begin a fresh recording attempt, discarding any prior transcript and
    /// error.
    pub fn start_recording(&mut self) {
        match self.state {
            CaptureState::Unsupported => {
                warn!("start_recording ignored: speech capture unavailable");
                return;
            }
            CaptureState::Listening => {
                debug!("start_recording ignored: already listening");
                return;
            }
            CaptureState::Idle | CaptureState::Frozen => {}
        }

        self.final_segments.clear();
        self.interim_segments.clear();
        self.error = None;
        self.restart_pending = false;

        match self.recognizer.start() {
            Ok(()) => self.state = CaptureState::Listening,
            Err(e) => {
                warn!("{} failed to start: {:#}", self.recognizer.name(), e);
                self.error = Some(format!("Speech recognition error: {}", e));
                self.state = CaptureState::Idle;
            }
        }
    }

    /// Stop and lock the transcript as the answer candidate.
    ///
    /// The listening indicator drops immediately, regardless of when (or
    /// whether) the underlying stream actually terminates; whatever the stream
    /// does afterwards is ignored.
    pub fn stop_recording(&mut self) {
        if self.state != CaptureState::Listening {
            debug!("stop_recording ignored in {:?}", self.state);
            return;
        }
        self.state = CaptureState::Frozen;
        self.restart_pending = false;
        if let Err(e) = self.recognizer.stop() {
            debug!("{} stop request failed: {:#}", self.recognizer.name(), e);
        }
    }

    /// Discard the frozen transcript and record again.
    pub fn re_record(&mut self) {
        if self.state != CaptureState::Frozen {
            debug!("re_record ignored in {:?}", self.state);
            return;
        }
        self.start_recording();
    }

    /// Reset for a new question: back to Idle with nothing accumulated.
    pub fn reset(&mut self) {
        if self.state == CaptureState::Unsupported {
            return;
        }
        if self.state == CaptureState::Listening {
            if let Err(e) = self.recognizer.stop() {
                debug!("{} stop request failed: {:#}", self.recognizer.name(), e);
            }
        }
        self.state = CaptureState::Idle;
        self.final_segments.clear();
        self.interim_segments.clear();
        self.restart_pending = false;
        self.error = None;
    }

    /// Hand off the frozen transcript, trimmed, at most once.
    ///
    /// Returns `None` unless recording has stopped and the transcript is
    /// non-empty after trimming. On hand-off the controller resets to Idle,
    /// ready for the next question.
    pub fn take_answer(&mut self) -> Option<String> {
        if self.state != CaptureState::Frozen {
            return None;
        }
        let transcript = self.live_transcript();
        let trimmed = transcript.trim();
        if trimmed.is_empty() {
            return None;
        }
        let answer = trimmed.to_string();
        self.state = CaptureState::Idle;
        self.final_segments.clear();
        self.interim_segments.clear();
        Some(answer)
    }

    /// Apply one recognizer event. The platform adapter calls this for every
    /// event the stream produces.
    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Started => {
                if self.state == CaptureState::Listening {
                    self.restart_pending = false;
                }
            }
            RecognitionEvent::Result(batch) => self.on_result(batch),
            RecognitionEvent::Ended => self.on_ended(),
            RecognitionEvent::Error(message) => self.on_error(message),
        }
    }

    fn on_result(&mut self, batch: ResultBatch) {
        if self.state != CaptureState::Listening {
            debug!("recognition result dropped in {:?}", self.state);
            return;
        }
        // Final segments only ever append; the interim tail is replaced wholesale.
        self.final_segments.extend(batch.finals);
        self.interim_segments = batch.interims;
    }

    fn on_ended(&mut self) {
        if self.state != CaptureState::Listening {
            // Stop already won this race, or we never were listening.
            debug!("stream end ignored in {:?}", self.state);
            return;
        }
        if self.restart_pending {
            debug!("stream end ignored: restart already pending");
            return;
        }

        // The recognizer gave up on its own while we are still armed: reopen
        // without losing accumulated final text. Interim text died with the
        // old stream.
        self.interim_segments.clear();
        self.restart_pending = true;
        if let Err(e) = self.recognizer.start() {
            warn!("{} failed to restart: {:#}", self.recognizer.name(), e);
            self.error = Some(format!("Speech recognition error: {}", e));
            self.restart_pending = false;
            self.state = CaptureState::Idle;
        }
    }

    fn on_error(&mut self, message: String) {
        warn!("{} error: {}", self.recognizer.name(), message);
        if self.state != CaptureState::Listening {
            return;
        }
        // An explicit recognizer error ends the attempt; only clean stream
        // ends are restarted.
        self.error = Some(format!("Speech recognition error: {}", message));
        self.restart_pending = false;
        self.state = CaptureState::Idle;
    }
}
