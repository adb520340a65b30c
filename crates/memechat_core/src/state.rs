use crate::message::{Message, MessageSnapshot};
use crate::view_model::ChatViewModel;

/// Lifecycle of the single outstanding reply request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// No request outstanding.
    #[default]
    Idle,
    /// Request issued; nothing shown beyond the user's own message yet.
    Sent,
    /// Response received; the composing placeholder is visible while the
    /// reply waits out the minimum indicator delay.
    AwaitingReply(PendingReply),
}

/// Reply payload held back until the composing indicator has been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub media_url: Option<String>,
}

/// In-memory session state. The transcript is never empty and contains at
/// most one pending placeholder, which is always the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    transcript: Vec<Message>,
    phase: RequestPhase,
    draft: String,
    dark_mode: bool,
    dirty: bool,
}

impl ChatState {
    /// Fresh session seeded with the welcome message.
    pub fn new(now: impl Into<String>) -> Self {
        Self {
            transcript: vec![Message::welcome(now)],
            phase: RequestPhase::Idle,
            draft: String::new(),
            dark_mode: false,
            dirty: true,
        }
    }

    pub fn view(&self) -> ChatViewModel {
        ChatViewModel {
            transcript: self.transcript.clone(),
            draft: self.draft.clone(),
            dark_mode: self.dark_mode,
            in_flight: self.in_flight(),
        }
    }

    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    /// True while a send is outstanding; callers use this to disable input.
    pub fn in_flight(&self) -> bool {
        !matches!(self.phase, RequestPhase::Idle)
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn draft(&self) -> &str {
        &self.draft
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.draft = text;
        self.mark_dirty();
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub(crate) fn append_user(&mut self, text: String, now: String) {
        self.transcript.push(Message::user(text, now));
        self.mark_dirty();
    }

    pub(crate) fn begin_request(&mut self) {
        self.phase = RequestPhase::Sent;
        self.mark_dirty();
    }

    /// Appends the composing placeholder and holds the reply for later reveal.
    pub(crate) fn show_composing(&mut self, reply: PendingReply, now: String) {
        self.transcript.push(Message::composing(now));
        self.phase = RequestPhase::AwaitingReply(reply);
        self.mark_dirty();
    }

    /// Replaces the placeholder with the held reply. Returns false when no
    /// reply is awaiting reveal, leaving the state untouched.
    pub(crate) fn resolve_composing(&mut self, now: String) -> bool {
        match std::mem::replace(&mut self.phase, RequestPhase::Idle) {
            RequestPhase::AwaitingReply(reply) => {
                if self.transcript.last().is_some_and(|last| last.pending) {
                    self.transcript.pop();
                }
                self.transcript
                    .push(Message::assistant(reply.text, reply.media_url, now));
                self.mark_dirty();
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// Converts a failed request into a visible failure notice. Any
    /// placeholder is removed so nothing is left pending.
    pub(crate) fn fail_request(&mut self, error: &str, now: String) {
        if self.transcript.last().is_some_and(|last| last.pending) {
            self.transcript.pop();
        }
        self.transcript.push(Message::failure(error, now));
        self.phase = RequestPhase::Idle;
        self.mark_dirty();
    }

    /// Drops all history and reseeds the transcript.
    pub(crate) fn reset(&mut self, now: String) {
        self.transcript = vec![Message::cleared(now)];
        self.phase = RequestPhase::Idle;
        self.mark_dirty();
    }

    pub(crate) fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.mark_dirty();
        self.dark_mode
    }

    pub(crate) fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.mark_dirty();
    }

    /// Replaces the seeded transcript with previously persisted messages.
    /// An empty snapshot keeps the seed so the transcript stays non-empty.
    pub(crate) fn restore_transcript(&mut self, snapshot: Vec<MessageSnapshot>) {
        if snapshot.is_empty() {
            return;
        }
        self.transcript = snapshot
            .into_iter()
            .map(|message| Message {
                sender: message.sender,
                text: Some(message.text),
                media_url: message.media_url,
                timestamp: message.timestamp,
                pending: false,
            })
            .collect();
        self.mark_dirty();
    }

    /// Finalized transcript content, suitable for persistence.
    pub fn transcript_snapshot(&self) -> Vec<MessageSnapshot> {
        self.transcript
            .iter()
            .filter_map(|message| {
                message.text.as_ref().map(|text| MessageSnapshot {
                    sender: message.sender,
                    text: text.clone(),
                    media_url: message.media_url.clone(),
                    timestamp: message.timestamp.clone(),
                })
            })
            .collect()
    }
}
