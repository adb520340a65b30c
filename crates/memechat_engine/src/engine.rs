use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::client::{HttpReplyService, ReplyService, ReplySettings};
use crate::EngineEvent;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub reply: ReplySettings,
    /// Minimum time the composing indicator stays visible before a reply
    /// is revealed.
    pub composing_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reply: ReplySettings::default(),
            composing_delay: Duration::from_secs(1),
        }
    }
}

enum EngineCommand {
    RequestReply { text: String },
    ScheduleComposing,
    CancelComposing,
}

/// Handle onto the engine thread. Commands are fire-and-forget; outcomes
/// come back as [`EngineEvent`]s via `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let service = Arc::new(HttpReplyService::new(config.reply.clone()));
        Self::with_service(config, service)
    }

    pub fn with_service(config: EngineConfig, service: Arc<dyn ReplyService>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let composing_delay = config.composing_delay;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Token for the currently scheduled composing delay, if any.
            // Scheduling a new delay supersedes a previous one.
            let mut composing: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::RequestReply { text } => {
                        let service = service.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = service.request_reply(&text).await;
                            let _ = event_tx.send(EngineEvent::ReplyCompleted { result });
                        });
                    }
                    EngineCommand::ScheduleComposing => {
                        if let Some(token) = composing.take() {
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        composing = Some(token.clone());
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            tokio::select! {
                                _ = tokio::time::sleep(composing_delay) => {
                                    let _ = event_tx.send(EngineEvent::ComposingElapsed);
                                }
                                _ = token.cancelled() => {}
                            }
                        });
                    }
                    EngineCommand::CancelComposing => {
                        if let Some(token) = composing.take() {
                            token.cancel();
                        }
                    }
                }
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn request_reply(&self, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::RequestReply { text: text.into() });
    }

    pub fn schedule_composing(&self) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleComposing);
    }

    pub fn cancel_composing(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelComposing);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|event_rx| event_rx.try_recv().ok())
    }
}
