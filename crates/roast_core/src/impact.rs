/// Upper bound (exclusive) of the `Efficient` tier, grams CO2.
pub const EFFICIENT_BELOW_GRAMS: f64 = 0.1;
/// Upper bound (exclusive) of the `Moderate` tier, grams CO2.
pub const MODERATE_BELOW_GRAMS: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTier {
    Efficient,
    Moderate,
    Wasteful,
}

impl ImpactTier {
    /// Buckets a carbon cost into a tier. Total over all f64 values:
    /// negatives fall below the lowest bound and classify `Efficient`;
    /// non-finite input (NaN/infinity) violates the input contract and
    /// classifies `Wasteful` as the conservative fallback.
    pub fn of(carbon_cost: f64) -> Self {
        if !carbon_cost.is_finite() {
            return ImpactTier::Wasteful;
        }
        if carbon_cost < EFFICIENT_BELOW_GRAMS {
            ImpactTier::Efficient
        } else if carbon_cost < MODERATE_BELOW_GRAMS {
            ImpactTier::Moderate
        } else {
            ImpactTier::Wasteful
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactTier::Efficient => "Efficient",
            ImpactTier::Moderate => "Moderate",
            ImpactTier::Wasteful => "Wasteful",
        }
    }

    /// Mascot reaction line shown above the results card.
    pub fn mood_line(self) -> &'static str {
        match self {
            ImpactTier::Efficient => "This tree is THRIVING! Your prompt is basically plant food!",
            ImpactTier::Moderate => "This tree is vibing! Not too shabby, not too crazy!",
            ImpactTier::Wasteful => {
                "This tree is NOT having it! Your prompt is giving it climate anxiety!"
            }
        }
    }
}

/// Display metadata for one classified carbon cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactDisplay {
    pub tier: ImpactTier,
    pub label: &'static str,
    /// Foreground accent, CSS hex.
    pub color: &'static str,
    /// Card background, CSS hex.
    pub background: &'static str,
    /// Progress-bar gradient stops, CSS hex pair.
    pub bar_gradient: (&'static str, &'static str),
}

/// Classifies a carbon cost (grams CO2) into its tier and display metadata.
/// Pure and total; see [`ImpactTier::of`] for the non-finite fallback.
pub fn classify(carbon_cost: f64) -> ImpactDisplay {
    let tier = ImpactTier::of(carbon_cost);
    match tier {
        ImpactTier::Efficient => ImpactDisplay {
            tier,
            label: tier.label(),
            color: "#16a34a",
            background: "#f0fdf4",
            bar_gradient: ("#22c55e", "#16a34a"),
        },
        ImpactTier::Moderate => ImpactDisplay {
            tier,
            label: tier.label(),
            color: "#ca8a04",
            background: "#fefce8",
            bar_gradient: ("#eab308", "#ca8a04"),
        },
        ImpactTier::Wasteful => ImpactDisplay {
            tier,
            label: tier.label(),
            color: "#dc2626",
            background: "#fef2f2",
            bar_gradient: ("#ef4444", "#dc2626"),
        },
    }
}

/// Maps a carbon cost to a bar-fill percentage in [0, 100].
///
/// The bar is a tier indicator, not a gauge: every cost in a tier snaps to
/// that tier's fixed fill width, so two values in the same tier render
/// identically.
pub fn map_to_progress(carbon_cost: f64) -> u8 {
    match ImpactTier::of(carbon_cost) {
        ImpactTier::Efficient => 8,
        ImpactTier::Moderate => 50,
        ImpactTier::Wasteful => 100,
    }
}
