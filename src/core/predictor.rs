use serde::{Deserialize, Serialize};

use crate::core::features::FeatureVector;
use crate::core::{model_v1, model_v2};
use crate::models::{EquipmentItem, PerformanceScores};

/// Performance model generation selector.
///
/// The two generations differ in feature scaling and weight-adjustment
/// philosophy and are kept as parallel implementations, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelGeneration {
    V1,
    #[default]
    V2,
}

/// Predict all six performance axes for one catalog item.
///
/// Missing second moments are estimated from the primary geometry; missing
/// primary geometry (aspect ratio or span) makes the item unpredictable and
/// yields `None`.
pub fn predict_item(
    item: &EquipmentItem,
    generation: ModelGeneration,
) -> Option<PerformanceScores> {
    let specs = &item.specs;
    let aspect_ratio = specs.aspect_ratio?;
    let span = specs.wingspan?;

    let features = FeatureVector::from_specs(
        specs.area,
        aspect_ratio,
        span,
        specs.roll_moment,
        specs.pitch_moment,
    );

    Some(match generation {
        ModelGeneration::V1 => model_v1::predict(&features),
        ModelGeneration::V2 => model_v2::predict(&features),
    })
}

/// Apply the generation's weight adjustment to a set of predictions.
pub fn adjust_for_weight(
    scores: PerformanceScores,
    generation: ModelGeneration,
    rider_weight_kg: f64,
    area: f64,
) -> PerformanceScores {
    match generation {
        ModelGeneration::V1 => model_v1::adjust_for_weight(scores, rider_weight_kg),
        ModelGeneration::V2 => model_v2::adjust_for_weight(scores, rider_weight_kg, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoilSpecs;

    fn item(aspect_ratio: Option<f64>, wingspan: Option<f64>) -> EquipmentItem {
        EquipmentItem {
            id: 7,
            handle: "spitfire-900".to_string(),
            title: "AXIS Spitfire 900 Carbon Front Wing".to_string(),
            price: "899.00".to_string(),
            available: true,
            url: String::new(),
            specs: FoilSpecs {
                area: 900.0,
                series: "Spitfire".to_string(),
                aspect_ratio,
                wingspan,
                chord: None,
                volume: None,
                roll_moment: None,
                pitch_moment: None,
            },
        }
    }

    #[test]
    fn test_predicts_with_estimated_moments() {
        let scores = predict_item(&item(Some(9.8), Some(940.0)), ModelGeneration::V2);
        assert!(scores.is_some());
    }

    #[test]
    fn test_missing_primary_geometry_yields_none() {
        assert!(predict_item(&item(None, Some(940.0)), ModelGeneration::V2).is_none());
        assert!(predict_item(&item(Some(9.8), None), ModelGeneration::V1).is_none());
    }

    #[test]
    fn test_generations_disagree() {
        // The generations were trained on different samples; identical
        // inputs should not produce identical predictions.
        let item = item(Some(9.8), Some(940.0));
        let v1 = predict_item(&item, ModelGeneration::V1).unwrap();
        let v2 = predict_item(&item, ModelGeneration::V2).unwrap();
        assert_ne!(v1, v2);
    }
}
