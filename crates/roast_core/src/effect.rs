#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the analyze collaborator to score a prompt.
    RequestAnalysis { prompt: String },
    /// Ask the song collaborator for a roast song.
    RequestSong { prompt: String, roast: String },
}
