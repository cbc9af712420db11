use roast_core::{AnalysisOutcome, AnalysisResult, Effect, Msg, SongOutcome};
use roast_engine::{AnalysisDelivery, AnalyzeResponse, ApiError, ApiSettings, EngineEvent, EngineHandle};
use roast_logging::{roast_info, roast_warn};

/// Bridges the pure core and the IO engine: core effects become engine
/// commands, engine events become core messages. The engine/core type
/// conversion lives here so the two crates stay independent.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestAnalysis { prompt } => {
                    roast_info!("RequestAnalysis prompt_len={}", prompt.len());
                    self.engine.analyze(prompt);
                }
                Effect::RequestSong { prompt, roast } => {
                    roast_info!("RequestSong prompt_len={} roast_len={}", prompt.len(), roast.len());
                    self.engine.generate_song(prompt, roast);
                }
            }
        }
    }

    /// Drains completed engine work into core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisDone { prompt, delivery } => {
            let outcome = match delivery {
                AnalysisDelivery::Service(response) => {
                    AnalysisOutcome::Service(to_result(prompt, response))
                }
                AnalysisDelivery::DemoFallback(response) => {
                    AnalysisOutcome::DemoFallback(to_result(prompt, response))
                }
            };
            Msg::AnalysisResolved(outcome)
        }
        EngineEvent::SongDone { result } => {
            let outcome = match result {
                Ok(response) => SongOutcome::Delivered {
                    title: response.title,
                    audio_url: response.audio_url,
                    image_url: response.image_url,
                    status: response.status,
                },
                Err(err) => {
                    // Song failures are logged, never surfaced as blocking
                    // errors; the user may retry from the results screen.
                    roast_warn!("song generation failed: {}", err);
                    SongOutcome::Failed
                }
            };
            Msg::SongResolved(outcome)
        }
    }
}

fn to_result(prompt: String, response: AnalyzeResponse) -> AnalysisResult {
    AnalysisResult {
        prompt,
        tokens: response.tokens,
        carbon_cost: response.carbon_cost,
        efficiency_score: response.efficiency_score,
        roast: response.roast,
        rewrite: response.rewrite,
        token_savings: response.token_savings,
        carbon_savings: response.carbon_savings,
    }
}
