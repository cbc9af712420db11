use crate::result::AnalysisResult;
use crate::song::SongOutcome;

/// Outcome of one submission: the collaborator's own result, or the local
/// demo recovery after a collaborator failure. Both variants carry a full
/// result, so the results flow never starts from an absent store.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Service(AnalysisResult),
    DemoFallback(AnalysisResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the prompt input box.
    PromptChanged(String),
    /// Typing debounce elapsed; the mascot stops reacting.
    PromptIdle,
    /// User submitted the current prompt for analysis.
    PromptSubmitted,
    /// The analyze call resolved (service result or demo fallback).
    AnalysisResolved(AnalysisOutcome),
    /// User asked for the next roast.
    NextRoastClicked,
    /// User asked for a roast song.
    GenerateSongClicked,
    /// The song call resolved.
    SongResolved(SongOutcome),
    /// User navigated back to the submission screen.
    NewPromptClicked,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
