use anyhow::Result;

/// One batch of recognition output.
///
/// `finals` are the segments this batch settled, in chronological order; they
/// only ever append to the transcript. `interims` are all currently pending
/// provisional segments and replace the previous pending set wholesale.
/// Segments carry their own leading/trailing spacing.
#[derive(Debug, Clone, Default)]
pub struct ResultBatch {
    pub finals: Vec<String>,
    pub interims: Vec<String>,
}

/// Events produced by a continuous recognition stream.
#[derive(Debug, Clone)]
pub enum RecognitionEvent {
    /// The underlying stream went live (fires on every open and reopen)
    Started,
    /// Incremental transcription output
    Result(ResultBatch),
    /// The stream terminated on its own (silence timeout, service hiccup)
    Ended,
    /// The recognizer reported an error and stopped
    Error(String),
}

/// Continuous speech-to-text capability, fixed to one locale.
///
/// Implementations wrap a platform recognition stream. `start` and `stop` are
/// control requests; outcomes come back asynchronously as `RecognitionEvent`s,
/// which the platform adapter feeds to `CaptureController::handle_event`. Each
/// controller owns its recognizer instance rather than sharing process-wide
/// state, so tests can substitute a scripted fake.
pub trait SpeechRecognizer: Send {
    /// Whether speech capture is available in this environment at all.
    fn is_available(&self) -> bool;

    /// Request a new recognition stream.
    fn start(&mut self) -> Result<()>;

    /// Request termination of the current stream.
    fn stop(&mut self) -> Result<()>;

    /// BCP-47 language tag the stream recognizes.
    fn locale(&self) -> &str;

    /// Recognizer name for logging
    fn name(&self) -> &str;
}
