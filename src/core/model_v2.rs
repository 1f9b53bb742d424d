//! Second-generation performance model.
//!
//! Trained on 83 catalog wings with official second-moment data. Features
//! are standardized against the training scaler (shared by all six axes)
//! before the linear pass, and predictions are rounded to whole points.
//! Training fit per axis: lift 98.5%, glide 96.7%, speed 99.6%,
//! carving 98.8%, pump 89.4%, comfort 99.2%.

use crate::core::features::FeatureVector;
use crate::models::PerformanceScores;

/// Ideal rider-weight-to-area ratio in kg/cm², the sweet spot the weight
/// adjuster measures deviation from.
pub const IDEAL_WEIGHT_AREA_RATIO: f64 = 0.08;

/// Per-axis regression weights over standardized features, one field per
/// feature, plus the training fit.
#[derive(Debug, Clone, Copy)]
pub struct AxisModel {
    pub area: f64,
    pub aspect_ratio: f64,
    pub span: f64,
    pub roll_moment: f64,
    pub pitch_moment: f64,
    pub intercept: f64,
    pub r2: f64,
}

/// Standardization parameters shared by all six axes.
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    pub mean: FeatureVector,
    pub scale: FeatureVector,
}

pub const SCALER: Scaler = Scaler {
    mean: FeatureVector {
        area: 1087.24,
        aspect_ratio: 10.02,
        span: 1004.70,
        roll_moment: 7881.59,
        pitch_moment: 161.66,
    },
    scale: FeatureVector {
        area: 387.45,
        aspect_ratio: 3.66,
        span: 231.21,
        roll_moment: 6232.45,
        pitch_moment: 136.02,
    },
};

pub const LIFT: AxisModel = AxisModel {
    area: 12.9075,
    aspect_ratio: -4.7242,
    span: 9.5215,
    roll_moment: -2.7077,
    pitch_moment: -0.2402,
    intercept: 72.66,
    r2: 0.9846,
};

pub const GLIDE: AxisModel = AxisModel {
    area: -2.6292,
    aspect_ratio: 13.8312,
    span: 6.474,
    roll_moment: -7.8148,
    pitch_moment: -2.8748,
    intercept: 67.58,
    r2: 0.9669,
};

pub const SPEED: AxisModel = AxisModel {
    area: -5.9244,
    aspect_ratio: 16.9553,
    span: 2.1496,
    roll_moment: -3.514,
    pitch_moment: -0.9278,
    intercept: 50.15,
    r2: 0.9962,
};

pub const CARVING: AxisModel = AxisModel {
    area: 7.8833,
    aspect_ratio: -13.1637,
    span: -6.1535,
    roll_moment: 3.348,
    pitch_moment: 8.4092,
    intercept: 48.8,
    r2: 0.9881,
};

pub const PUMP: AxisModel = AxisModel {
    area: 12.4315,
    aspect_ratio: 9.267,
    span: 7.7727,
    roll_moment: -8.4967,
    pitch_moment: -0.0082,
    intercept: 69.26,
    r2: 0.894,
};

pub const COMFORT: AxisModel = AxisModel {
    area: 10.7756,
    aspect_ratio: -14.279,
    span: 2.1701,
    roll_moment: 0.1664,
    pitch_moment: -3.5081,
    intercept: 76.86,
    r2: 0.9917,
};

/// Z-score each feature against the training scaler.
fn standardize(features: &FeatureVector) -> FeatureVector {
    FeatureVector {
        area: (features.area - SCALER.mean.area) / SCALER.scale.area,
        aspect_ratio: (features.aspect_ratio - SCALER.mean.aspect_ratio)
            / SCALER.scale.aspect_ratio,
        span: (features.span - SCALER.mean.span) / SCALER.scale.span,
        roll_moment: (features.roll_moment - SCALER.mean.roll_moment) / SCALER.scale.roll_moment,
        pitch_moment: (features.pitch_moment - SCALER.mean.pitch_moment)
            / SCALER.scale.pitch_moment,
    }
}

fn axis_score(scaled: &FeatureVector, model: &AxisModel) -> f64 {
    let raw = model.area * scaled.area
        + model.aspect_ratio * scaled.aspect_ratio
        + model.span * scaled.span
        + model.roll_moment * scaled.roll_moment
        + model.pitch_moment * scaled.pitch_moment
        + model.intercept;

    raw.round().clamp(0.0, 100.0)
}

/// Score all six axes for one set of features.
pub fn predict(features: &FeatureVector) -> PerformanceScores {
    let scaled = standardize(features);

    PerformanceScores {
        lift: axis_score(&scaled, &LIFT),
        glide: axis_score(&scaled, &GLIDE),
        speed: axis_score(&scaled, &SPEED),
        carving: axis_score(&scaled, &CARVING),
        pump: axis_score(&scaled, &PUMP),
        comfort: axis_score(&scaled, &COMFORT),
    }
}

/// Scale predictions by how far the rider sits from the wing's weight sweet
/// spot. The multipliers are tuned heuristics, not physics; speed is left
/// alone.
pub fn adjust_for_weight(
    scores: PerformanceScores,
    rider_weight_kg: f64,
    area: f64,
) -> PerformanceScores {
    let weight_factor = (rider_weight_kg / area) / IDEAL_WEIGHT_AREA_RATIO;

    PerformanceScores {
        lift: (scores.lift * (1.1 - weight_factor * 0.1))
            .round()
            .clamp(0.0, 100.0),
        glide: (scores.glide * (0.9 + weight_factor * 0.1))
            .round()
            .clamp(0.0, 100.0),
        speed: scores.speed,
        carving: (scores.carving * (1.05 - weight_factor * 0.05))
            .round()
            .clamp(0.0, 100.0),
        pump: (scores.pump * (1.15 - weight_factor * 0.15))
            .round()
            .clamp(0.0, 100.0),
        comfort: (scores.comfort * (1.1 - weight_factor * 0.1))
            .round()
            .clamp(0.0, 100.0),
    }
}
