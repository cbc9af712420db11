/// One completed carbon analysis, immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Original text submitted.
    pub prompt: String,
    /// Token count of the prompt.
    pub tokens: u32,
    /// Grams of CO2-equivalent; displayable when finite and non-negative.
    pub carbon_cost: f64,
    /// Intended range [0, 100]; rendered with clamping and rounding only.
    pub efficiency_score: f64,
    /// Primary roast; `None` when the collaborator omitted one.
    pub roast: Option<String>,
    pub rewrite: Option<String>,
    /// Meaningful only when `rewrite` is present.
    pub token_savings: Option<u32>,
    pub carbon_savings: Option<f64>,
}

impl AnalysisResult {
    /// Roast sent along with a song request. Falls back to the first
    /// built-in roast so the wire payload is never empty.
    pub fn primary_roast(&self) -> &str {
        self.roast
            .as_deref()
            .unwrap_or(crate::rotation::FALLBACK_ROASTS[0])
    }
}

/// Where a stored result came from: the analyze collaborator, or the local
/// demo recovery after a collaborator failure. Kept explicit so the view
/// can disclose it and tests can assert which path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Service,
    DemoFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredAnalysis {
    pub result: AnalysisResult,
    pub source: AnalysisSource,
}

/// Hand-off slot between the submission flow and the results flow.
///
/// Absence is a distinct, representable state: the results flow checks
/// presence before rendering anything analysis-dependent and never renders
/// a classification against a zeroed default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    slot: Option<StoredAnalysis>,
}

impl ResultStore {
    /// Stores one result, overwriting any previous value (last writer wins).
    pub fn set(&mut self, result: AnalysisResult, source: AnalysisSource) {
        self.slot = Some(StoredAnalysis { result, source });
    }

    pub fn get(&self) -> Option<&StoredAnalysis> {
        self.slot.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.slot.is_some()
    }
}
