use std::io::{self, Write};

use memechat_core::{filter_transcript, ChatViewModel, Message, Sender};

use super::constants::*;

/// Full redraw of the session: banner, (optionally filtered) transcript,
/// and the input hint.
pub(crate) fn render(view: &ChatViewModel, query: Option<&str>) {
    let mut out = io::stdout();
    let _ = write!(out, "{CLEAR_SCREEN}");

    banner(&mut out, view);

    let rows = filter_transcript(&view.transcript, query.unwrap_or(""));
    if let Some(query) = query {
        let _ = writeln!(out, "Showing messages matching \"{query}\":");
        let _ = writeln!(out);
    }
    for message in rows {
        print_message(&mut out, message, view.dark_mode);
    }

    let _ = writeln!(out);
    if view.in_flight {
        let _ = writeln!(out, "{DIM_TEXT}{ASSISTANT_NAME} is typing...{RESET_STYLE}");
    } else {
        let _ = writeln!(out, "{DIM_TEXT}{PROMPT_HINT}{RESET_STYLE}");
    }
    let _ = out.flush();
}

fn banner(out: &mut impl Write, view: &ChatViewModel) {
    let theme = if view.dark_mode { "dark" } else { "light" };
    let _ = writeln!(out, "=== {APP_TITLE} ({theme} mode) ===");
    let _ = writeln!(out);
}

fn print_message(out: &mut impl Write, message: &Message, dark_mode: bool) {
    let name = match message.sender {
        Sender::User => USER_NAME,
        Sender::Assistant => ASSISTANT_NAME,
    };
    let style = if dark_mode { DARK_TEXT } else { "" };
    let reset = if dark_mode { RESET_STYLE } else { "" };

    match message.text.as_deref() {
        Some(text) => {
            let _ = writeln!(out, "{style}[{}] {name}: {text}{reset}", message.timestamp);
            if let Some(url) = message.media_url.as_deref() {
                let _ = writeln!(out, "{style}        (meme: {url}){reset}");
            }
        }
        None => {
            let _ = writeln!(
                out,
                "{style}[{}] {name}: {COMPOSING_INDICATOR}{reset}",
                message.timestamp
            );
        }
    }
}

pub(crate) fn print_help() {
    println!("Commands:");
    println!("  /help           show this help");
    println!("  /theme          toggle between light and dark mode");
    println!("  /search <text>  show only messages containing <text>");
    println!("  /search         clear the active search");
    println!("  /clear          clear the chat history (asks for confirmation)");
    println!("  /quit           leave the chat");
    println!("Anything else is sent to {ASSISTANT_NAME}.");
}
