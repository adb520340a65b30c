//! Memechat core: pure chat-session state machine and view-model helpers.
mod effect;
mod filter;
mod message;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::filter_transcript;
pub use message::{Message, MessageSnapshot, Sender, CLEARED_TEXT, FAILURE_PREFIX, WELCOME_TEXT};
pub use msg::Msg;
pub use state::{ChatState, PendingReply, RequestPhase};
pub use update::update;
pub use view_model::ChatViewModel;
