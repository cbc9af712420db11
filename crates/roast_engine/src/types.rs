use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub prompt: &'a str,
}

/// Successful `POST /analyze` response. Field names follow the
/// collaborator contract; the carbon field is accepted under either of
/// its deployed spellings. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub tokens: u32,
    #[serde(alias = "carbon")]
    pub carbon_cost: f64,
    #[serde(default)]
    pub efficiency_score: f64,
    #[serde(default)]
    pub roast: Option<String>,
    #[serde(default)]
    pub rewrite: Option<String>,
    #[serde(default)]
    pub token_savings: Option<u32>,
    #[serde(default)]
    pub carbon_savings: Option<f64>,
    #[serde(default)]
    pub claude_analysis: Option<String>,
}

/// Body of `POST /song`.
#[derive(Debug, Clone, Serialize)]
pub struct SongRequest<'a> {
    pub prompt: &'a str,
    pub roast: &'a str,
    pub style: &'a str,
}

/// Successful `POST /song` response; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SongResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// How one submission was resolved: by the collaborator, or by the local
/// demo catalog after a collaborator failure. Named so callers and tests
/// can tell the recovery path from a genuine service response.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisDelivery {
    Service(AnalyzeResponse),
    DemoFallback(AnalyzeResponse),
}

impl AnalysisDelivery {
    pub fn response(&self) -> &AnalyzeResponse {
        match self {
            AnalysisDelivery::Service(response) => response,
            AnalysisDelivery::DemoFallback(response) => response,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("invalid response body")]
    InvalidBody,
    #[error("network error")]
    Network,
}
