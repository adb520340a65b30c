#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the input box.
    InputChanged(String),
    /// User submitted the current input for sending.
    SendSubmitted { now: String },
    /// The remote reply service produced a response.
    ReplyReceived {
        reply: String,
        media_url: Option<String>,
        now: String,
    },
    /// The remote reply service failed; `error` is a human-readable description.
    ReplyFailed { error: String, now: String },
    /// The minimum composing-indicator delay has elapsed.
    ComposingElapsed { now: String },
    /// Restore previously persisted messages at session start.
    TranscriptRestored(Vec<crate::MessageSnapshot>),
    /// Restore persisted display preferences at session start.
    PreferencesRestored { dark_mode: bool },
    /// User confirmed clearing the chat history.
    ClearConfirmed { now: String },
    /// User toggled between light and dark display.
    ThemeToggled,
    /// Fallback for placeholder wiring.
    NoOp,
}
