//! Memechat engine: remote reply transport, the composing-delay timer, and
//! the key/value persistence port.
mod client;
mod engine;
mod store;
mod types;

pub use client::{HttpReplyService, ReplyService, ReplySettings};
pub use engine::{EngineConfig, EngineHandle};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{EngineEvent, FailureKind, ReplyError, ReplyPayload};
