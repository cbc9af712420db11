//! Green Roast core: pure state machine and view-model helpers.
mod effect;
mod impact;
mod msg;
mod result;
mod rotation;
mod song;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use impact::{
    classify, map_to_progress, ImpactDisplay, ImpactTier, EFFICIENT_BELOW_GRAMS,
    MODERATE_BELOW_GRAMS,
};
pub use msg::{AnalysisOutcome, Msg};
pub use result::{AnalysisResult, AnalysisSource, ResultStore, StoredAnalysis};
pub use rotation::{RoastRotation, FALLBACK_ROASTS};
pub use song::{SongArtifact, SongJob, SongOutcome};
pub use state::{AppState, PromptRejection, Screen};
pub use update::update;
pub use view_model::{
    AppViewModel, ResultsView, RewriteView, SavingsView, DEFAULT_SONG_TITLE,
};
