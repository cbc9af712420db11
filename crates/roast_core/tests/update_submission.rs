use std::sync::Once;

use roast_core::{
    update, AnalysisOutcome, AnalysisResult, AnalysisSource, AppState, Effect, Msg, Screen,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(roast_logging::initialize_for_tests);
}

fn sample_result(prompt: &str, carbon_cost: f64) -> AnalysisResult {
    AnalysisResult {
        prompt: prompt.to_string(),
        tokens: 12,
        carbon_cost,
        efficiency_score: 88.0,
        roast: Some("Nice and concise! The planet approves".to_string()),
        rewrite: None,
        token_savings: None,
        carbon_savings: None,
    }
}

fn submit_prompt(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::PromptChanged(input.to_string()));
    update(state, Msg::PromptSubmitted)
}

#[test]
fn empty_prompt_is_rejected_before_any_network_call() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::PromptSubmitted);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.screen, Screen::Submission);
    assert!(!view.submitting);
    assert!(view.rejection.is_some());
    assert!(state.consume_dirty());
}

#[test]
fn whitespace_only_prompt_is_rejected() {
    init_logging();
    let (state, effects) = submit_prompt(AppState::new(), "   \t  ");

    assert!(effects.is_empty());
    assert!(state.view().rejection.is_some());
}

#[test]
fn valid_prompt_is_trimmed_and_requests_analysis() {
    init_logging();
    let (mut state, effects) = submit_prompt(AppState::new(), "  Explain quantum computing  ");

    assert_eq!(
        effects,
        vec![Effect::RequestAnalysis {
            prompt: "Explain quantum computing".to_string(),
        }]
    );
    let view = state.view();
    assert!(view.submitting);
    assert!(view.rejection.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn second_submit_while_in_flight_is_dropped() {
    init_logging();
    let (state, first) = submit_prompt(AppState::new(), "Explain quantum computing");
    assert_eq!(first.len(), 1);

    let (mut state, second) = update(state, Msg::PromptSubmitted);

    assert!(second.is_empty());
    assert!(state.view().submitting);
    // The first submission already marked the state dirty.
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::PromptSubmitted);
    assert!(!state.consume_dirty());
}

#[test]
fn service_result_navigates_to_results_with_present_store() {
    init_logging();
    let (state, _) = submit_prompt(AppState::new(), "Explain quantum computing");

    let result = sample_result("Explain quantum computing", 0.08);
    let (state, effects) = update(
        state,
        Msg::AnalysisResolved(AnalysisOutcome::Service(result.clone())),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.screen, Screen::Results);
    assert!(!view.submitting);
    let results = view.results.expect("store present after submission");
    assert_eq!(results.prompt, "Explain quantum computing");
    assert!(!results.demo_fallback);
    assert_eq!(
        state.store().get().map(|stored| &stored.result),
        Some(&result)
    );
    assert_eq!(
        state.store().get().map(|stored| stored.source),
        Some(AnalysisSource::Service)
    );
}

#[test]
fn demo_fallback_also_navigates_and_is_disclosed() {
    init_logging();
    let (state, _) = submit_prompt(AppState::new(), "Explain quantum computing");

    let (state, _) = update(
        state,
        Msg::AnalysisResolved(AnalysisOutcome::DemoFallback(sample_result(
            "Explain quantum computing",
            2.1,
        ))),
    );

    let view = state.view();
    assert_eq!(view.screen, Screen::Results);
    let results = view.results.expect("fallback still populates the store");
    assert!(results.demo_fallback);
}

#[test]
fn second_result_overwrites_the_first_without_merging() {
    init_logging();
    let (state, _) = submit_prompt(AppState::new(), "first prompt");
    let first = AnalysisResult {
        rewrite: Some("shorter first".to_string()),
        token_savings: Some(5),
        carbon_savings: Some(0.02),
        ..sample_result("first prompt", 0.08)
    };
    let (state, _) = update(state, Msg::AnalysisResolved(AnalysisOutcome::Service(first)));

    let (state, _) = update(state, Msg::NewPromptClicked);
    let (state, _) = submit_prompt(state, "second prompt");
    let second = sample_result("second prompt", 0.6);
    let (state, _) = update(
        state,
        Msg::AnalysisResolved(AnalysisOutcome::Service(second.clone())),
    );

    // Last writer wins: nothing of the first result survives.
    assert_eq!(
        state.store().get().map(|stored| &stored.result),
        Some(&second)
    );
    let results = state.view().results.unwrap();
    assert_eq!(results.prompt, "second prompt");
    assert!(results.rewrite.is_none());
}

#[test]
fn store_is_absent_before_any_submission() {
    init_logging();
    let state = AppState::new();

    assert!(state.store().get().is_none());
    assert!(state.view().results.is_none());
}

#[test]
fn new_prompt_returns_to_submission_and_clears_input() {
    init_logging();
    let (state, _) = submit_prompt(AppState::new(), "Explain quantum computing");
    let (state, _) = update(
        state,
        Msg::AnalysisResolved(AnalysisOutcome::Service(sample_result(
            "Explain quantum computing",
            0.08,
        ))),
    );

    let (state, effects) = update(state, Msg::NewPromptClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.screen, Screen::Submission);
    assert!(view.prompt_input.is_empty());
    assert!(view.rejection.is_none());
    // The previous result is retained until the next submission overwrites it.
    assert!(state.store().is_present());
}

#[test]
fn typing_flag_follows_input_and_idle() {
    init_logging();
    let state = AppState::new();

    let (state, _) = update(state, Msg::PromptChanged("Expl".to_string()));
    assert!(state.view().typing);

    let (state, _) = update(state, Msg::PromptIdle);
    assert!(!state.view().typing);

    let (state, _) = update(state, Msg::PromptChanged(String::new()));
    assert!(!state.view().typing);
}

#[test]
fn tick_and_noop_change_nothing() {
    init_logging();
    let mut state = AppState::new();
    state.consume_dirty();
    let before = state.view();

    let (mut state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());

    let (mut state, effects) = update(state, Msg::NoOp);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before);
}
