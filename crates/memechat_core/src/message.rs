/// Originator of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// Greeting shown when a session starts with no persisted history.
pub const WELCOME_TEXT: &str =
    "Hello! I'm MemeLord, the funniest bot around. How can I make you laugh today?";

/// Greeting shown after the user clears the transcript.
pub const CLEARED_TEXT: &str = "Chat history cleared! How can I help you today?";

/// Prefix marking an in-transcript failure notice.
pub const FAILURE_PREFIX: &str = "💀 Oops: ";

/// A single transcript entry.
///
/// `text` is `None` only while `pending` is set: a pending entry is the
/// transient "reply is being composed" placeholder, and while one exists it
/// is always the last element of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: Option<String>,
    pub media_url: Option<String>,
    pub timestamp: String,
    pub pending: bool,
}

impl Message {
    pub fn user(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: Some(text.into()),
            media_url: None,
            timestamp: timestamp.into(),
            pending: false,
        }
    }

    pub fn assistant(
        text: impl Into<String>,
        media_url: Option<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            sender: Sender::Assistant,
            text: Some(text.into()),
            media_url,
            timestamp: timestamp.into(),
            pending: false,
        }
    }

    /// The composing placeholder shown while a reply waits to be revealed.
    pub fn composing(timestamp: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: None,
            media_url: None,
            timestamp: timestamp.into(),
            pending: true,
        }
    }

    pub fn failure(description: &str, timestamp: impl Into<String>) -> Self {
        Self::assistant(format!("{FAILURE_PREFIX}{description}"), None, timestamp)
    }

    pub fn welcome(timestamp: impl Into<String>) -> Self {
        Self::assistant(WELCOME_TEXT, None, timestamp)
    }

    pub fn cleared(timestamp: impl Into<String>) -> Self {
        Self::assistant(CLEARED_TEXT, None, timestamp)
    }
}

/// Finalized portion of a message, as persisted and restored across sessions.
/// Composing placeholders are transient and never snapshotted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSnapshot {
    pub sender: Sender,
    pub text: String,
    pub media_url: Option<String>,
    pub timestamp: String,
}
