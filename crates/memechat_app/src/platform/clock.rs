use chrono::Local;

/// Display-formatted wall-clock stamp, captured when a message is created.
pub(crate) fn now_stamp() -> String {
    Local::now().format("%H:%M").to_string()
}
