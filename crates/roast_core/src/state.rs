use crate::result::{AnalysisResult, AnalysisSource, ResultStore};
use crate::rotation::RoastRotation;
use crate::song::SongJob;

/// The two flows of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Submission,
    Results,
}

/// Why a submission was rejected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRejection {
    Empty,
}

impl PromptRejection {
    pub fn message(self) -> &'static str {
        match self {
            PromptRejection::Empty => "Enter a prompt before analyzing.",
        }
    }
}

/// Whole-app state. Mutated only through [`crate::update`]; the shell
/// observes it via [`AppState::view`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    screen: Screen,
    prompt_input: String,
    typing: bool,
    submitting: bool,
    rejection: Option<PromptRejection>,
    store: ResultStore,
    rotation: Option<RoastRotation>,
    song: SongJob,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn song(&self) -> &SongJob {
        &self.song
    }

    pub(crate) fn rotation(&self) -> Option<&RoastRotation> {
        self.rotation.as_ref()
    }

    pub(crate) fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn set_prompt_input(&mut self, text: String) {
        self.typing = !text.is_empty();
        self.prompt_input = text;
        self.rejection = None;
        self.mark_dirty();
    }

    pub(crate) fn clear_typing(&mut self) {
        if self.typing {
            self.typing = false;
            self.mark_dirty();
        }
    }

    pub(crate) fn reject_prompt(&mut self, rejection: PromptRejection) {
        self.rejection = Some(rejection);
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) {
        self.submitting = true;
        self.rejection = None;
        self.mark_dirty();
    }

    /// Stores the submission outcome and switches to the results flow.
    /// Any in-flight song job from a previous result is discarded.
    pub(crate) fn accept_result(&mut self, result: AnalysisResult, source: AnalysisSource) {
        self.rotation = Some(RoastRotation::for_roast(result.roast.as_deref()));
        self.store.set(result, source);
        self.song = SongJob::Idle;
        self.submitting = false;
        self.typing = false;
        self.screen = Screen::Results;
        self.mark_dirty();
    }

    pub(crate) fn advance_roast(&mut self) {
        if let Some(rotation) = self.rotation.as_mut() {
            let visible_change = rotation.len() > 1;
            rotation.next();
            if visible_change {
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn begin_song_request(&mut self) {
        self.song = SongJob::Requesting;
        self.mark_dirty();
    }

    pub(crate) fn finish_song_request(&mut self, job: SongJob) {
        self.song = job;
        self.mark_dirty();
    }

    pub(crate) fn return_to_submission(&mut self) {
        self.screen = Screen::Submission;
        self.prompt_input.clear();
        self.typing = false;
        self.submitting = false;
        self.rejection = None;
        // Drop the in-flight association so a stale song resolution
        // cannot land on the next result.
        self.song = SongJob::Idle;
        self.mark_dirty();
    }

    pub(crate) fn rejection(&self) -> Option<PromptRejection> {
        self.rejection
    }

    pub(crate) fn is_typing(&self) -> bool {
        self.typing
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it; the shell renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
