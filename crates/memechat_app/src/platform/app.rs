use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use memechat_core::{update, ChatState, Msg};
use memechat_engine::{EngineConfig, FileStore};

use super::auth::{self, EnvCredentialVerifier};
use super::clock::now_stamp;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::ui;
use super::ui::constants::{CLEAR_CANCELLED, CLEAR_CONFIRM_PROMPT, COMPOSING_NOTICE};

const STATE_DIR: &str = ".memechat";

enum UiEvent {
    Line(String),
    Eof,
}

enum LineOutcome {
    Continue,
    Quit,
}

/// Ephemeral render-layer state: the active search query and the pending
/// clear confirmation. Neither is part of the session state proper.
#[derive(Default)]
struct SessionUi {
    query: Option<String>,
    awaiting_clear_confirm: bool,
    needs_render: bool,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        if !auth::run_login_gate(&EnvCredentialVerifier::from_env(), &mut input)? {
            return Ok(());
        }
    }

    let state_dir = std::env::current_dir()?.join(STATE_DIR);
    let store = FileStore::new(state_dir);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(EngineConfig::default(), store.clone(), msg_tx);

    // initialize(): seed, then restore whatever the store yields.
    let state = ChatState::new(now_stamp());
    let state = dispatch(
        state,
        Msg::TranscriptRestored(persistence::load_transcript(&store)),
        &runner,
    );
    let mut state = dispatch(
        state,
        Msg::PreferencesRestored {
            dark_mode: persistence::load_theme(&store),
        },
        &runner,
    );

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    spawn_stdin_reader(ui_tx);

    let mut session_ui = SessionUi::default();
    state.consume_dirty();
    ui::render::render(&state.view(), session_ui.query.as_deref());

    loop {
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, &runner);
        }

        match ui_rx.try_recv() {
            Ok(UiEvent::Line(line)) => {
                let (next, outcome) = handle_line(line, state, &runner, &mut session_ui);
                state = next;
                if matches!(outcome, LineOutcome::Quit) {
                    break;
                }
            }
            Ok(UiEvent::Eof) | Err(mpsc::TryRecvError::Disconnected) => break,
            Err(mpsc::TryRecvError::Empty) => thread::sleep(Duration::from_millis(20)),
        }

        if state.consume_dirty() || std::mem::take(&mut session_ui.needs_render) {
            ui::render::render(&state.view(), session_ui.query.as_deref());
        }
    }

    Ok(())
}

fn dispatch(state: ChatState, msg: Msg, runner: &EffectRunner) -> ChatState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn handle_line(
    line: String,
    mut state: ChatState,
    runner: &EffectRunner,
    session_ui: &mut SessionUi,
) -> (ChatState, LineOutcome) {
    let trimmed = line.trim();

    if session_ui.awaiting_clear_confirm {
        session_ui.awaiting_clear_confirm = false;
        if trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes") {
            state = dispatch(state, Msg::ClearConfirmed { now: now_stamp() }, runner);
        } else {
            println!("{CLEAR_CANCELLED}");
        }
        return (state, LineOutcome::Continue);
    }

    match trimmed {
        "" => (state, LineOutcome::Continue),
        "/quit" | "/exit" => (state, LineOutcome::Quit),
        "/help" => {
            ui::render::print_help();
            (state, LineOutcome::Continue)
        }
        "/theme" => {
            let state = dispatch(state, Msg::ThemeToggled, runner);
            (state, LineOutcome::Continue)
        }
        "/clear" => {
            session_ui.awaiting_clear_confirm = true;
            print!("{CLEAR_CONFIRM_PROMPT}");
            let _ = io::stdout().flush();
            (state, LineOutcome::Continue)
        }
        "/search" => {
            session_ui.query = None;
            session_ui.needs_render = true;
            (state, LineOutcome::Continue)
        }
        _ => {
            if let Some(query) = trimmed.strip_prefix("/search ") {
                session_ui.query = Some(query.to_string());
                session_ui.needs_render = true;
                return (state, LineOutcome::Continue);
            }
            if trimmed.starts_with('/') {
                println!("Unknown command {trimmed}. Try /help.");
                return (state, LineOutcome::Continue);
            }
            if state.in_flight() {
                // The input surface disables itself during a send.
                println!("{COMPOSING_NOTICE}");
                return (state, LineOutcome::Continue);
            }
            let state = dispatch(state, Msg::InputChanged(trimmed.to_string()), runner);
            let state = dispatch(state, Msg::SendSubmitted { now: now_stamp() }, runner);
            (state, LineOutcome::Continue)
        }
    }
}

fn spawn_stdin_reader(ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if ui_tx.send(UiEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = ui_tx.send(UiEvent::Eof);
    });
}
