pub const APP_TITLE: &str = "MemeLord";

pub const USER_NAME: &str = "You";
pub const ASSISTANT_NAME: &str = "MemeLord";

/// Rendered in place of text while a reply is being composed.
pub const COMPOSING_INDICATOR: &str = "● ● ●";

pub const PROMPT_HINT: &str = "Type something... (/help for commands)";
pub const COMPOSING_NOTICE: &str = "MemeLord is still typing — hold on a moment.";
pub const CLEAR_CONFIRM_PROMPT: &str = "Are you sure you want to clear chat history? [y/N] ";
pub const CLEAR_CANCELLED: &str = "Clear cancelled.";

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

// Theme styling: light renders plain, dark renders bright-on-dim.
pub const DARK_TEXT: &str = "\x1b[97m";
pub const DIM_TEXT: &str = "\x1b[2m";
pub const RESET_STYLE: &str = "\x1b[0m";
