use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chat_logging::{chat_info, chat_warn};
use memechat_core::{Effect, Msg};
use memechat_engine::{EngineConfig, EngineEvent, EngineHandle, FileStore};

use super::clock::now_stamp;
use super::persistence;

/// Executes the effects requested by `update` and pumps engine events back
/// into the session loop as `Msg`s.
pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    store: FileStore,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, store: FileStore, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = Arc::new(EngineHandle::new(config));
        let runner = Self { engine, store };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestReply { text } => {
                    chat_info!("RequestReply text_len={}", text.len());
                    self.engine.request_reply(text);
                }
                Effect::ScheduleComposing => self.engine.schedule_composing(),
                Effect::CancelComposing => self.engine.cancel_composing(),
                Effect::PersistTranscript(snapshot) => {
                    persistence::save_transcript(&self.store, &snapshot);
                }
                Effect::PersistTheme { dark_mode } => {
                    persistence::save_theme(&self.store, dark_mode);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::ReplyCompleted { result } => match result {
                        Ok(payload) => Msg::ReplyReceived {
                            reply: payload.reply,
                            media_url: payload.meme_url,
                            now: now_stamp(),
                        },
                        Err(err) => {
                            chat_warn!("Reply request failed: {}", err);
                            Msg::ReplyFailed {
                                error: err.to_string(),
                                now: now_stamp(),
                            }
                        }
                    },
                    EngineEvent::ComposingElapsed => Msg::ComposingElapsed { now: now_stamp() },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
