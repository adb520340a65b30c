use std::fmt;

/// Payload of a successful remote reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPayload {
    pub reply: String,
    pub meme_url: Option<String>,
}

/// A failed reply request, reduced to a single human-readable outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyError {
    pub kind: FailureKind,
    pub message: String,
}

impl ReplyError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.message)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedBody => write!(f, "malformed reply body"),
        }
    }
}

/// Events emitted back to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Terminal outcome of a reply request.
    ReplyCompleted {
        result: Result<ReplyPayload, ReplyError>,
    },
    /// The minimum composing-indicator delay has elapsed.
    ComposingElapsed,
}
