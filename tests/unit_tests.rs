// Unit tests for the Foil Advisor core engine

use std::collections::HashSet;

use foil_advisor::core::{
    features::FeatureVector, match_score, model_v1, model_v2, predictor, sizing,
    predictor::ModelGeneration, series, Ranker,
};
use foil_advisor::models::{
    Discipline, EquipmentItem, FoilSpecs, RiderProfile, Series, SkillLevel, WeightUnit,
};

fn wing(id: u32, series: &str, title: &str, area: f64, aspect_ratio: Option<f64>) -> EquipmentItem {
    EquipmentItem {
        id,
        handle: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        price: "949.00".to_string(),
        available: true,
        url: String::new(),
        specs: FoilSpecs {
            area,
            series: series.to_string(),
            aspect_ratio,
            wingspan: None,
            chord: None,
            volume: None,
            roll_moment: None,
            pitch_moment: None,
        },
    }
}

fn rider(weight: f64, unit: WeightUnit, skill: SkillLevel, discipline: Discipline) -> RiderProfile {
    RiderProfile {
        weight,
        unit,
        skill,
        discipline,
    }
}

#[test]
fn test_base_area_scenario_intermediate_wing() {
    // 175 lbs intermediate wing: 175 x 6 x 1.0 x 1.0
    let profile = rider(
        175.0,
        WeightUnit::Lbs,
        SkillLevel::Intermediate,
        Discipline::Wing,
    );
    assert_eq!(sizing::target_area(&profile), 1050.0);
}

#[test]
fn test_base_area_scenario_parawing_beginner_kg() {
    // 80 kg normalizes to 176 lbs; parawing applies only its own skill table
    let profile = rider(
        80.0,
        WeightUnit::Kg,
        SkillLevel::Beginner,
        Discipline::Parawing,
    );
    assert_eq!(profile.weight_lbs(), 176.0);
    assert_eq!(sizing::target_area(&profile), 1056.0);
}

#[test]
fn test_preferred_series_scenario_intermediate_wing() {
    let preferred = series::preferred_series(Discipline::Wing, SkillLevel::Intermediate);
    assert_eq!(preferred, &[Series::Surge, Series::ArtV2, Series::Fireball]);
}

#[test]
fn test_base_area_is_pure_and_positive() {
    let skills = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];
    let disciplines = [
        Discipline::Wing,
        Discipline::Parawing,
        Discipline::Kite,
        Discipline::Prone,
        Discipline::Sup,
        Discipline::Downwind,
        Discipline::Pump,
    ];

    for skill in skills {
        for discipline in disciplines {
            let profile = rider(165.0, WeightUnit::Lbs, skill, discipline);
            let first = sizing::target_area(&profile);
            let second = sizing::target_area(&profile);
            assert!(first > 0.0);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_base_area_monotonic_in_weight() {
    for discipline in [Discipline::Wing, Discipline::Downwind, Discipline::Parawing] {
        let mut previous = 0.0;
        for weight in (80..=300).step_by(10) {
            let profile = rider(
                weight as f64,
                WeightUnit::Lbs,
                SkillLevel::Intermediate,
                discipline,
            );
            let area = sizing::target_area(&profile);
            assert!(area >= previous);
            previous = area;
        }
    }
}

#[test]
fn test_predictions_clamped_for_extreme_inputs() {
    let extremes = [
        FeatureVector {
            area: 0.0,
            aspect_ratio: 0.0,
            span: 0.0,
            roll_moment: 0.0,
            pitch_moment: 0.0,
        },
        FeatureVector {
            area: 1e9,
            aspect_ratio: -50.0,
            span: 1e7,
            roll_moment: -1e9,
            pitch_moment: 1e9,
        },
    ];

    for features in extremes {
        for scores in [model_v1::predict(&features), model_v2::predict(&features)] {
            for value in [
                scores.lift,
                scores.glide,
                scores.speed,
                scores.carving,
                scores.pump,
                scores.comfort,
            ] {
                assert!(
                    (0.0..=100.0).contains(&value),
                    "axis score {} out of range",
                    value
                );
            }
        }
    }
}

#[test]
fn test_weight_adjustment_stays_clamped() {
    let features = FeatureVector {
        area: 1200.0,
        aspect_ratio: 8.0,
        span: 1000.0,
        roll_moment: 8000.0,
        pitch_moment: 170.0,
    };
    let scores = model_v2::predict(&features);

    for weight_kg in [30.0, 70.0, 150.0] {
        let adjusted = predictor::adjust_for_weight(scores, ModelGeneration::V2, weight_kg, 1200.0);
        for value in [
            adjusted.lift,
            adjusted.glide,
            adjusted.speed,
            adjusted.carving,
            adjusted.pump,
            adjusted.comfort,
        ] {
            assert!((0.0..=100.0).contains(&value));
        }
    }
}

#[test]
fn test_match_score_is_weighted_mean_in_range() {
    let features = FeatureVector {
        area: 1000.0,
        aspect_ratio: 10.0,
        span: 980.0,
        roll_moment: 7000.0,
        pitch_moment: 150.0,
    };
    let scores = model_v2::predict(&features);

    for discipline in [Discipline::Downwind, Discipline::Wing, Discipline::Pump] {
        let priorities = match_score::default_priorities(discipline);
        let value = match_score::match_score(&scores, &priorities);
        assert!((0.0..=100.0).contains(&value));
    }
}

#[test]
fn test_legacy_bsc_never_recommended() {
    let ranker = Ranker::with_defaults();
    // BSC sized perfectly for a beginner target, plus one mediocre current
    // wing; the legacy item must never appear regardless
    let catalog = vec![
        wing(1, "BSC", "AXIS BSC 1365 Carbon Front Wing", 1365.0, Some(6.2)),
        wing(2, "Surge", "AXIS Surge 1180 Carbon Front Wing", 1180.0, Some(7.8)),
    ];

    let skills = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];
    let disciplines = [Discipline::Wing, Discipline::Sup, Discipline::Downwind];

    for skill in skills {
        for discipline in disciplines {
            let profile = rider(175.0, WeightUnit::Lbs, skill, discipline);
            let result = ranker.rank(&profile, &catalog, &HashSet::new());
            assert!(
                result.candidates.iter().all(|c| c.item.id != 1),
                "legacy BSC leaked into recommendations for {:?}/{:?}",
                skill,
                discipline
            );
        }
    }
}

#[test]
fn test_dedup_is_idempotent() {
    let ranker = Ranker::with_defaults();
    let profile = rider(
        175.0,
        WeightUnit::Lbs,
        SkillLevel::Intermediate,
        Discipline::Wing,
    );

    let duplicated = vec![
        wing(1, "Surge", "AXIS Surge 1050 Carbon Front Wing", 1050.0, None),
        wing(1, "Surge", "AXIS Surge 1050 Carbon Front Wing", 1050.0, None),
        wing(2, "Fireball", "AXIS Fireball 1030 Carbon Front Wing", 1030.0, None),
    ];
    let first = ranker.rank(&profile, &duplicated, &HashSet::new());

    // Re-ranking the already-deduplicated candidate set changes nothing
    let deduped: Vec<EquipmentItem> = first.candidates.iter().map(|c| c.item.clone()).collect();
    let second = ranker.rank(&profile, &deduped, &HashSet::new());

    let first_ids: Vec<u32> = first.candidates.iter().map(|c| c.item.id).collect();
    let second_ids: Vec<u32> = second.candidates.iter().map(|c| c.item.id).collect();
    assert_eq!(first_ids, vec![1, 2]);
    assert_eq!(first_ids, second_ids);
}

#[test]
fn test_reruns_are_byte_identical() {
    let ranker = Ranker::with_defaults();
    let profile = rider(
        200.0,
        WeightUnit::Lbs,
        SkillLevel::Advanced,
        Discipline::Downwind,
    );
    let catalog = vec![
        wing(1, "ART v2", "AXIS ART v2 1099 Carbon Front Wing", 1099.0, Some(10.4)),
        wing(2, "PNG", "AXIS PNG V2 1310 Carbon Front Wing", 1310.0, Some(8.4)),
        wing(3, "Surge", "AXIS Surge 1295 Carbon Front Wing", 1295.0, Some(7.9)),
        wing(4, "Tempo", "AXIS Tempo 1250 Carbon Front Wing", 1250.0, Some(10.1)),
        wing(5, "Spitfire", "AXIS Spitfire 1180 Carbon Front Wing", 1180.0, Some(9.2)),
    ];

    let first = ranker.rank(&profile, &catalog, &HashSet::new());
    let second = ranker.rank(&profile, &catalog, &HashSet::new());

    let render = |result: &foil_advisor::RankResult| -> Vec<String> {
        result
            .candidates
            .iter()
            .map(|c| format!("{}:{}:{}", c.item.id, c.score, c.reasoning))
            .collect()
    };
    assert_eq!(render(&first), render(&second));
}

#[test]
fn test_generations_kept_separate() {
    let mut item = wing(
        1,
        "Fireball",
        "AXIS Fireball 1030 Carbon Front Wing",
        1030.0,
        Some(8.8),
    );
    item.specs.wingspan = Some(950.0);

    let v1 = predictor::predict_item(&item, ModelGeneration::V1).unwrap();
    let v2 = predictor::predict_item(&item, ModelGeneration::V2).unwrap();
    assert_ne!(v1, v2);

    // v2 rounds to whole points; v1 does not round
    for value in [v2.lift, v2.glide, v2.speed, v2.carving, v2.pump, v2.comfort] {
        assert_eq!(value, value.round());
    }
}
