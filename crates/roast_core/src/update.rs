use crate::state::{PromptRejection, Screen};
use crate::{AnalysisOutcome, AnalysisSource, AppState, Effect, Msg, SongJob};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(text) => {
            state.set_prompt_input(text);
            Vec::new()
        }
        Msg::PromptIdle => {
            state.clear_typing();
            Vec::new()
        }
        Msg::PromptSubmitted => {
            // Single submission in flight; repeated submits are dropped.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            let prompt = state.prompt_input().trim().to_string();
            if prompt.is_empty() {
                state.reject_prompt(PromptRejection::Empty);
                return (state, Vec::new());
            }
            state.begin_submission();
            vec![Effect::RequestAnalysis { prompt }]
        }
        Msg::AnalysisResolved(outcome) => {
            let (result, source) = match outcome {
                AnalysisOutcome::Service(result) => (result, AnalysisSource::Service),
                AnalysisOutcome::DemoFallback(result) => (result, AnalysisSource::DemoFallback),
            };
            state.accept_result(result, source);
            Vec::new()
        }
        Msg::NextRoastClicked => {
            if state.screen() == Screen::Results {
                state.advance_roast();
            }
            Vec::new()
        }
        Msg::GenerateSongClicked => {
            if state.screen() != Screen::Results {
                return (state, Vec::new());
            }
            // Single-flight: a click while a request is outstanding is
            // dropped, not queued.
            if state.song().is_requesting() {
                return (state, Vec::new());
            }
            let Some(stored) = state.store().get() else {
                return (state, Vec::new());
            };
            let prompt = stored.result.prompt.clone();
            let roast = stored.result.primary_roast().to_string();
            state.begin_song_request();
            vec![Effect::RequestSong { prompt, roast }]
        }
        Msg::SongResolved(outcome) => {
            // A resolution for a discarded job (reset or replaced result)
            // is dropped; only the live request leaves `Requesting`.
            if state.song().is_requesting() {
                state.finish_song_request(SongJob::resolve(outcome));
            }
            Vec::new()
        }
        Msg::NewPromptClicked => {
            state.return_to_submission();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
