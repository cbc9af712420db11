//! Green Roast engine: collaborator HTTP contracts and effect execution.
mod client;
mod demo;
mod engine;
mod types;

pub use client::{AnalyzeApi, ApiSettings, ReqwestApiClient, SongApi, SONG_STYLE};
pub use demo::{analyze_with_fallback, pick_demo};
pub use engine::{EngineEvent, EngineHandle};
pub use types::{
    AnalysisDelivery, AnalyzeRequest, AnalyzeResponse, ApiError, FailureKind, SongRequest,
    SongResponse,
};
