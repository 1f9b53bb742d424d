//! First-generation downwind performance model.
//!
//! Hand-fit on a 15-foil sample (6 Tempo + 9 Fireball) for a 70 kg rider in
//! 25 kn wind and 1 m swell. Operates directly on unscaled features.

use crate::core::features::FeatureVector;
use crate::models::PerformanceScores;

/// Rider weight the sample was collected at.
pub const REFERENCE_WEIGHT_KG: f64 = 70.0;

/// Per-axis regression weights, one field per feature.
#[derive(Debug, Clone, Copy)]
pub struct AxisModel {
    pub area: f64,
    pub aspect_ratio: f64,
    pub roll_moment: f64,
    pub pitch_moment: f64,
    pub span: f64,
    pub intercept: f64,
}

pub const LIFT: AxisModel = AxisModel {
    area: 0.14822825040750423,
    aspect_ratio: -0.9810164521250035,
    roll_moment: -0.00553254659604957,
    pitch_moment: -0.6700097569064343,
    span: 0.14567965171491723,
    intercept: -128.919579515365,
};

pub const GLIDE: AxisModel = AxisModel {
    area: 0.1650526764242689,
    aspect_ratio: 6.914802485748505,
    roll_moment: -0.004103808765371867,
    pitch_moment: -0.28389984839637866,
    span: -0.03976470117815789,
    intercept: -80.22483484354241,
};

pub const SPEED: AxisModel = AxisModel {
    area: 0.048724159317672155,
    aspect_ratio: 4.841239860896757,
    roll_moment: 0.0015154026979228533,
    pitch_moment: -0.06456899588074466,
    span: -0.17066427185118885,
    intercept: 126.8297486696896,
};

pub const CARVING: AxisModel = AxisModel {
    area: 0.3680457155957665,
    aspect_ratio: 8.054172962722415,
    roll_moment: 0.0017400280903533006,
    pitch_moment: -1.418425821611558,
    span: -0.39708728562698303,
    intercept: 142.78388737064108,
};

pub const PUMP: AxisModel = AxisModel {
    area: 0.2184842101502131,
    aspect_ratio: 2.151931893556875,
    roll_moment: -0.005572800645675385,
    pitch_moment: -0.6538854684120938,
    span: 0.057683016932336274,
    intercept: -145.57799595989906,
};

pub const COMFORT: AxisModel = AxisModel {
    area: 0.41894004558315356,
    aspect_ratio: 0.19009538493773318,
    roll_moment: -0.004343737092854858,
    pitch_moment: -2.313559344154672,
    span: -0.09051067135983078,
    intercept: -36.491932545780145,
};

fn axis_score(features: &FeatureVector, model: &AxisModel) -> f64 {
    let raw = model.area * features.area
        + model.aspect_ratio * features.aspect_ratio
        + model.roll_moment * features.roll_moment
        + model.pitch_moment * features.pitch_moment
        + model.span * features.span
        + model.intercept;

    raw.clamp(0.0, 100.0)
}

/// Score all six axes for one set of features.
pub fn predict(features: &FeatureVector) -> PerformanceScores {
    PerformanceScores {
        lift: axis_score(features, &LIFT),
        glide: axis_score(features, &GLIDE),
        speed: axis_score(features, &SPEED),
        carving: axis_score(features, &CARVING),
        pump: axis_score(features, &PUMP),
        comfort: axis_score(features, &COMFORT),
    }
}

/// Shift predictions for riders away from the reference weight, one factor
/// step per 10 kg. Heavier riders gain speed and carving but give up lift,
/// glide, pump and comfort headroom.
pub fn adjust_for_weight(scores: PerformanceScores, rider_weight_kg: f64) -> PerformanceScores {
    let factor = (rider_weight_kg - REFERENCE_WEIGHT_KG) / 10.0;

    PerformanceScores {
        lift: (scores.lift - factor * 5.0).clamp(0.0, 100.0),
        glide: (scores.glide - factor * 3.0).clamp(0.0, 100.0),
        speed: (scores.speed + factor * 3.0).clamp(0.0, 100.0),
        carving: (scores.carving + factor * 2.0).clamp(0.0, 100.0),
        pump: (scores.pump - factor * 4.0).clamp(0.0, 100.0),
        comfort: (scores.comfort - factor * 2.0).clamp(0.0, 100.0),
    }
}
