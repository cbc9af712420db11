use crate::impact::{classify, map_to_progress, ImpactDisplay};
use crate::result::AnalysisSource;
use crate::rotation::FALLBACK_ROASTS;
use crate::song::SongJob;
use crate::state::{AppState, Screen};

/// Default title shown when the song collaborator omits one.
pub const DEFAULT_SONG_TITLE: &str = "Green Roast Diss Track";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub prompt_input: String,
    pub typing: bool,
    pub submitting: bool,
    pub rejection: Option<&'static str>,
    /// `None` on the results screen renders the dedicated empty state.
    pub results: Option<ResultsView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub prompt: String,
    pub tokens: u32,
    pub carbon_cost: f64,
    /// Clamped to [0, 100] and rounded; no other normalization.
    pub efficiency_score: u8,
    pub impact: ImpactDisplay,
    pub mood_line: &'static str,
    pub progress_percent: u8,
    pub roast: String,
    pub roast_count: usize,
    pub rewrite: Option<RewriteView>,
    pub song: SongJob,
    /// True when the result came from the demo recovery path.
    pub demo_fallback: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RewriteView {
    pub text: String,
    /// Present only when the analysis reported positive token savings.
    pub savings: Option<SavingsView>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsView {
    pub tokens: u32,
    pub carbon_grams: f64,
}

impl AppState {
    /// Builds the render snapshot. Classification and bar fill are
    /// re-derived from the stored carbon cost on every call, so they can
    /// never drift from the source value.
    pub fn view(&self) -> AppViewModel {
        let results = self.store().get().map(|stored| {
            let result = &stored.result;
            let roast = self
                .rotation()
                .map(|rotation| rotation.current().to_string())
                .unwrap_or_else(|| FALLBACK_ROASTS[0].to_string());
            let roast_count = self.rotation().map_or(1, |rotation| rotation.len());
            let rewrite = result.rewrite.as_ref().map(|text| RewriteView {
                text: text.clone(),
                savings: match result.token_savings {
                    Some(tokens) if tokens > 0 => Some(SavingsView {
                        tokens,
                        carbon_grams: result.carbon_savings.unwrap_or(0.0),
                    }),
                    _ => None,
                },
            });
            let impact = classify(result.carbon_cost);
            ResultsView {
                prompt: result.prompt.clone(),
                tokens: result.tokens,
                carbon_cost: result.carbon_cost,
                efficiency_score: result.efficiency_score.clamp(0.0, 100.0).round() as u8,
                impact,
                mood_line: impact.tier.mood_line(),
                progress_percent: map_to_progress(result.carbon_cost),
                roast,
                roast_count,
                rewrite,
                song: self.song().clone(),
                demo_fallback: stored.source == AnalysisSource::DemoFallback,
            }
        });

        AppViewModel {
            screen: self.screen(),
            prompt_input: self.prompt_input().to_string(),
            typing: self.is_typing(),
            submitting: self.is_submitting(),
            rejection: self.rejection().map(|rejection| rejection.message()),
            results,
            dirty: self.is_dirty(),
        }
    }
}
