use crate::Message;

/// Snapshot of everything the render surface needs for one redraw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    pub transcript: Vec<Message>,
    pub draft: String,
    pub dark_mode: bool,
    pub in_flight: bool,
}
