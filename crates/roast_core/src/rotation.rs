/// Roasts used when the analysis result carries none of its own.
pub const FALLBACK_ROASTS: [&str; 4] = [
    "Bro, you're choking the planet with that prompt!",
    "That's enough CO2 to power a small country!",
    "Your prompt is more toxic than a coal plant!",
    "Even trees are crying looking at this carbon footprint!",
];

/// Cyclic position over a fixed, non-empty roast list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoastRotation {
    roasts: Vec<String>,
    index: usize,
}

impl RoastRotation {
    /// Builds the rotation for a result: a single-entry list when the
    /// result supplied its own roast, else the built-in fallback set.
    pub fn for_roast(roast: Option<&str>) -> Self {
        let roasts = match roast {
            Some(roast) => vec![roast.to_string()],
            None => FALLBACK_ROASTS.iter().map(|s| s.to_string()).collect(),
        };
        Self { roasts, index: 0 }
    }

    pub fn current(&self) -> &str {
        &self.roasts[self.index]
    }

    /// Advances to the next roast, wrapping at the end. On a single-entry
    /// list this is a valid no-op transition.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.roasts.len();
    }

    pub fn len(&self) -> usize {
        self.roasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roasts.is_empty()
    }
}
