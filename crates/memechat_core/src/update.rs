use crate::{ChatState, Effect, Msg, PendingReply, RequestPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ChatState, msg: Msg) -> (ChatState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::SendSubmitted { now } => {
            let text = state.draft().trim().to_string();
            // Empty submissions and submissions during an outstanding send
            // leave the transcript untouched.
            if text.is_empty() || state.in_flight() {
                return (state, Vec::new());
            }
            state.append_user(text.clone(), now);
            state.begin_request();
            vec![
                Effect::PersistTranscript(state.transcript_snapshot()),
                Effect::RequestReply { text },
            ]
        }
        Msg::ReplyReceived {
            reply,
            media_url,
            now,
        } => {
            // A reply with no matching outstanding request is stale
            // (e.g. the session was cleared while it was in flight).
            if !matches!(state.phase(), RequestPhase::Sent) {
                return (state, Vec::new());
            }
            state.clear_draft();
            state.show_composing(
                PendingReply {
                    text: reply,
                    media_url,
                },
                now,
            );
            vec![Effect::ScheduleComposing]
        }
        Msg::ComposingElapsed { now } => {
            if state.resolve_composing(now) {
                vec![Effect::PersistTranscript(state.transcript_snapshot())]
            } else {
                Vec::new()
            }
        }
        Msg::ReplyFailed { error, now } => {
            if !state.in_flight() {
                return (state, Vec::new());
            }
            state.clear_draft();
            state.fail_request(&error, now);
            vec![Effect::PersistTranscript(state.transcript_snapshot())]
        }
        Msg::TranscriptRestored(snapshot) => {
            state.restore_transcript(snapshot);
            Vec::new()
        }
        Msg::PreferencesRestored { dark_mode } => {
            state.set_dark_mode(dark_mode);
            Vec::new()
        }
        Msg::ClearConfirmed { now } => {
            let mut effects = Vec::with_capacity(2);
            if state.in_flight() {
                effects.push(Effect::CancelComposing);
            }
            state.reset(now);
            effects.push(Effect::PersistTranscript(state.transcript_snapshot()));
            effects
        }
        Msg::ThemeToggled => {
            let dark_mode = state.toggle_theme();
            vec![Effect::PersistTheme { dark_mode }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
