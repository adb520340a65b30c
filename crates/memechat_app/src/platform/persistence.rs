use chat_logging::{chat_info, chat_warn};
use memechat_core::{MessageSnapshot, Sender};
use memechat_engine::KeyValueStore;
use serde::{Deserialize, Serialize};

const CHAT_HISTORY_KEY: &str = "chat_history.ron";
const DARK_MODE_KEY: &str = "dark_mode.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum PersistedSender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedMessage {
    sender: PersistedSender,
    text: String,
    media_url: Option<String>,
    timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedTranscript {
    messages: Vec<PersistedMessage>,
}

/// Loads the persisted transcript. Missing or malformed data yields an
/// empty snapshot so the session falls back to the seeded welcome.
pub(crate) fn load_transcript(store: &dyn KeyValueStore) -> Vec<MessageSnapshot> {
    let Some(content) = store.get(CHAT_HISTORY_KEY) else {
        return Vec::new();
    };

    let transcript: PersistedTranscript = match ron::from_str(&content) {
        Ok(transcript) => transcript,
        Err(err) => {
            chat_warn!("Failed to parse persisted chat history: {}", err);
            return Vec::new();
        }
    };

    chat_info!(
        "Loaded {} persisted messages",
        transcript.messages.len()
    );
    transcript
        .messages
        .into_iter()
        .map(|message| MessageSnapshot {
            sender: match message.sender {
                PersistedSender::User => Sender::User,
                PersistedSender::Assistant => Sender::Assistant,
            },
            text: message.text,
            media_url: message.media_url,
            timestamp: message.timestamp,
        })
        .collect()
}

pub(crate) fn save_transcript(store: &dyn KeyValueStore, snapshot: &[MessageSnapshot]) {
    let transcript = PersistedTranscript {
        messages: snapshot
            .iter()
            .map(|message| PersistedMessage {
                sender: match message.sender {
                    Sender::User => PersistedSender::User,
                    Sender::Assistant => PersistedSender::Assistant,
                },
                text: message.text.clone(),
                media_url: message.media_url.clone(),
                timestamp: message.timestamp.clone(),
            })
            .collect(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&transcript, pretty) {
        Ok(content) => content,
        Err(err) => {
            chat_warn!("Failed to serialize chat history: {}", err);
            return;
        }
    };

    store.set(CHAT_HISTORY_KEY, &content);
}

/// Loads the persisted theme preference, defaulting to light mode.
pub(crate) fn load_theme(store: &dyn KeyValueStore) -> bool {
    let Some(content) = store.get(DARK_MODE_KEY) else {
        return false;
    };

    match ron::from_str(&content) {
        Ok(dark_mode) => dark_mode,
        Err(err) => {
            chat_warn!("Failed to parse persisted theme preference: {}", err);
            false
        }
    }
}

pub(crate) fn save_theme(store: &dyn KeyValueStore, dark_mode: bool) {
    let pretty = ron::ser::PrettyConfig::new();
    match ron::ser::to_string_pretty(&dark_mode, pretty) {
        Ok(content) => store.set(DARK_MODE_KEY, &content),
        Err(err) => chat_warn!("Failed to serialize theme preference: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use memechat_engine::{FileStore, MemoryStore};
    use tempfile::tempdir;

    use super::*;

    fn sample_snapshot() -> Vec<MessageSnapshot> {
        vec![
            MessageSnapshot {
                sender: Sender::Assistant,
                text: "Hello! I'm MemeLord, the funniest bot around. How can I make you laugh today?".to_string(),
                media_url: None,
                timestamp: "09:00".to_string(),
            },
            MessageSnapshot {
                sender: Sender::User,
                text: "send a meme".to_string(),
                media_url: None,
                timestamp: "09:01".to_string(),
            },
            MessageSnapshot {
                sender: Sender::Assistant,
                text: "Sure! Here's a meme for you 😂👉".to_string(),
                media_url: Some("http://localhost:8000/memes/cat.jpg".to_string()),
                timestamp: "09:02".to_string(),
            },
        ]
    }

    #[test]
    fn transcript_round_trips_through_the_memory_store() {
        let store = MemoryStore::new();
        let snapshot = sample_snapshot();

        save_transcript(&store, &snapshot);
        let restored = load_transcript(&store);

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn transcript_round_trips_through_the_file_store() {
        let dir = tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().to_path_buf());
        let snapshot = sample_snapshot();

        save_transcript(&store, &snapshot);
        let restored = load_transcript(&store);

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn missing_transcript_yields_an_empty_snapshot() {
        let store = MemoryStore::new();

        assert!(load_transcript(&store).is_empty());
    }

    #[test]
    fn corrupt_transcript_yields_an_empty_snapshot() {
        let store = MemoryStore::new();
        store.set(CHAT_HISTORY_KEY, "not ron at all {{{");

        assert!(load_transcript(&store).is_empty());
    }

    #[test]
    fn theme_round_trips_and_defaults_to_light() {
        let store = MemoryStore::new();

        assert!(!load_theme(&store));
        save_theme(&store, true);
        assert!(load_theme(&store));
    }

    #[test]
    fn corrupt_theme_defaults_to_light() {
        let store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "maybe");

        assert!(!load_theme(&store));
    }
}
