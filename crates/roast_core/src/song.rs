/// Artifact fields delivered by the song collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongArtifact {
    pub title: Option<String>,
    pub audio_url: Option<String>,
    pub image_url: Option<String>,
}

/// Resolution of one song request, as reported by the IO layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongOutcome {
    Delivered {
        title: Option<String>,
        audio_url: Option<String>,
        image_url: Option<String>,
        status: Option<String>,
    },
    Failed,
}

/// Lifecycle of one song-generation attempt. At most one job is live at a
/// time; restarting from a terminal state discards the previous job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SongJob {
    #[default]
    Idle,
    Requesting,
    Streaming(SongArtifact),
    Complete(SongArtifact),
    Failed,
}

impl SongJob {
    pub fn is_requesting(&self) -> bool {
        matches!(self, SongJob::Requesting)
    }

    /// Transition out of `Requesting` as a pure function of the outcome.
    /// `status == "streaming"` keeps the artifact in flight; any other
    /// delivered status is final. Failure carries no artifact fields.
    pub fn resolve(outcome: SongOutcome) -> Self {
        match outcome {
            SongOutcome::Delivered {
                title,
                audio_url,
                image_url,
                status,
            } => {
                let artifact = SongArtifact {
                    title,
                    audio_url,
                    image_url,
                };
                if status.as_deref() == Some("streaming") {
                    SongJob::Streaming(artifact)
                } else {
                    SongJob::Complete(artifact)
                }
            }
            SongOutcome::Failed => SongJob::Failed,
        }
    }
}
