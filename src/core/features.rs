/// Roll moment estimate per (area x span) unit, fit once against the
/// reference spec sheet and frozen.
pub const ROLL_MOMENT_FACTOR: f64 = 0.0072;

/// Pitch moment estimate per area unit, fit alongside the roll factor.
pub const PITCH_MOMENT_FACTOR: f64 = 0.148;

/// The five model inputs, bound by name.
///
/// Keeping these as named fields ties every coefficient to its feature at
/// the type level; the models never see a positional array, so a reordered
/// feature cannot silently land on the wrong coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub area: f64,
    pub aspect_ratio: f64,
    pub span: f64,
    pub roll_moment: f64,
    pub pitch_moment: f64,
}

impl FeatureVector {
    /// Assemble model inputs for an item, estimating the second moments
    /// when the catalog does not carry them.
    pub fn from_specs(
        area: f64,
        aspect_ratio: f64,
        span: f64,
        roll_moment: Option<f64>,
        pitch_moment: Option<f64>,
    ) -> FeatureVector {
        FeatureVector {
            area,
            aspect_ratio,
            span,
            roll_moment: roll_moment.unwrap_or_else(|| estimate_roll_moment(area, span)),
            pitch_moment: pitch_moment.unwrap_or_else(|| estimate_pitch_moment(area)),
        }
    }
}

/// Roll moment correlates strongly with area and span.
pub fn estimate_roll_moment(area: f64, span: f64) -> f64 {
    area * span * ROLL_MOMENT_FACTOR
}

/// Pitch moment correlates with area.
pub fn estimate_pitch_moment(area: f64) -> f64 {
    area * PITCH_MOMENT_FACTOR
}
