use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use roast_core::{update, AppState, Msg, Screen};
use roast_engine::ApiSettings;

use super::effects::EffectRunner;
use super::{logging, render};

/// Matches the original page's one-second typing debounce.
const TYPING_DEBOUNCE: Duration = Duration::from_millis(1000);
/// Poll interval for engine completions and the render tick.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let settings = match std::env::var("GREENROAST_API_BASE") {
        Ok(base) => ApiSettings::with_base_str(&base)?,
        Err(_) => ApiSettings::default(),
    };
    let runner = EffectRunner::new(settings)?;

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut state = AppState::new();
    state.consume_dirty();
    render::render(&state.view());
    let mut last_input = Instant::now();

    loop {
        // Engine completions land before new input is interpreted.
        for msg in runner.poll() {
            state = dispatch(state, msg, &runner);
        }

        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                last_input = Instant::now();
                match interpret(state.screen(), &line) {
                    InputAction::Quit => break,
                    InputAction::Dispatch(msgs) => {
                        for msg in msgs {
                            state = dispatch(state, msg, &runner);
                        }
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let msg = if last_input.elapsed() >= TYPING_DEBOUNCE {
                    Msg::PromptIdle
                } else {
                    Msg::Tick
                };
                state = dispatch(state, msg, &runner);
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);
    if state.consume_dirty() {
        render::render(&state.view());
    }
    state
}

enum InputAction {
    Quit,
    Dispatch(Vec<Msg>),
}

fn interpret(screen: Screen, line: &str) -> InputAction {
    let command = line.trim();
    match screen {
        Screen::Submission => match command {
            "quit" | "exit" => InputAction::Quit,
            _ => InputAction::Dispatch(vec![
                Msg::PromptChanged(line.to_string()),
                Msg::PromptSubmitted,
            ]),
        },
        Screen::Results => match command {
            "roast" | "r" => InputAction::Dispatch(vec![Msg::NextRoastClicked]),
            "song" | "s" => InputAction::Dispatch(vec![Msg::GenerateSongClicked]),
            "new" | "n" => InputAction::Dispatch(vec![Msg::NewPromptClicked]),
            "quit" | "exit" | "q" => InputAction::Quit,
            _ => InputAction::Dispatch(vec![Msg::NoOp]),
        },
    }
}
