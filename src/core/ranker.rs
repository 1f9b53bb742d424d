use std::collections::HashSet;

use crate::core::{reasoning, series, sizing};
use crate::models::{EquipmentItem, RiderProfile, ScoredCandidate, Series, SkillLevel};

/// Every candidate starts here before the rule adjustments are summed.
pub const BASE_SCORE: f64 = 100.0;

/// Flat penalty for an item outside the rider's preferred-series list.
const SERIES_MISS_PENALTY: f64 = 50.0;
/// Advanced riders get a steeper penalty; a wrong family costs them more.
const SERIES_MISS_PENALTY_ADVANCED: f64 = 70.0;
/// Bonus for the first preferred series, shrinking per list position.
const SERIES_RANK_BONUS_MAX: f64 = 5.0;
const SERIES_RANK_BONUS_STEP: f64 = 2.0;

/// Beginners on a wing smaller than this fraction of target are flagged
/// unsafe.
const BEGINNER_MIN_AREA_RATIO: f64 = 0.8;
const BEGINNER_UNDERSIZE_PENALTY: f64 = 30.0;
/// Advanced riders above this fraction of target are dragging excess wing.
const ADVANCED_MAX_AREA_RATIO: f64 = 1.3;
const ADVANCED_OVERSIZE_PENALTY: f64 = 20.0;

/// Bonus when community feedback references the item.
pub const FEEDBACK_BONUS: f64 = 5.0;

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 3;
/// Candidates below this score are dropped rather than recommended.
pub const DEFAULT_MIN_SCORE: f64 = 30.0;

/// Result of one ranking pass.
#[derive(Debug)]
pub struct RankResult {
    pub candidates: Vec<ScoredCandidate>,
    pub target_area: f64,
    pub total_eligible: usize,
}

/// Rule-based recommendation ranker.
///
/// # Pipeline
/// 1. Normalize rider weight and compute the target area
/// 2. Restrict the catalog to current-era series
/// 3. Score every eligible item against the rider
/// 4. Drop low scores, deduplicate, stable-sort, take the top N
#[derive(Debug, Clone)]
pub struct Ranker {
    top_n: usize,
    min_score: f64,
}

impl Ranker {
    pub fn new(top_n: usize, min_score: f64) -> Self {
        Self { top_n, min_score }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TOP_N, DEFAULT_MIN_SCORE)
    }

    /// Rank the catalog for one rider.
    ///
    /// `boosted` carries the ids of items that community feedback
    /// references; an empty set disables the boost. An empty catalog yields
    /// an empty result, never an error.
    pub fn rank(
        &self,
        profile: &RiderProfile,
        catalog: &[EquipmentItem],
        boosted: &HashSet<u32>,
    ) -> RankResult {
        let target_area = sizing::target_area(profile);
        let preferred = series::preferred_series(profile.discipline, profile.skill);

        let mut seen = HashSet::new();
        let mut total_eligible = 0;
        let mut candidates: Vec<ScoredCandidate> = Vec::new();

        for item in catalog {
            let effective = series::effective_series(item);
            if !series::is_current(effective) {
                continue;
            }
            total_eligible += 1;

            let score = score_item(
                item,
                effective,
                profile.skill,
                target_area,
                preferred,
                boosted.contains(&item.id),
            );
            if score < self.min_score {
                continue;
            }
            // Guard against catalog data carrying duplicate entries; the
            // first occurrence wins.
            if !seen.insert(item.id) {
                continue;
            }

            candidates.push(ScoredCandidate {
                item: item.clone(),
                score,
                series: effective,
                reasoning: String::new(),
            });
        }

        // Stable sort: ties keep catalog order, so reruns are byte-identical.
        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(self.top_n);

        for candidate in &mut candidates {
            let band = reasoning::size_band(candidate.item.specs.area, target_area);
            candidate.reasoning = reasoning::reasoning(profile.discipline, candidate.series, band);
        }

        RankResult {
            candidates,
            target_area,
            total_eligible,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Score one eligible item. All adjustments are independent and summed, not
/// short-circuited; the result is clamped to [0, 100].
fn score_item(
    item: &EquipmentItem,
    effective: Series,
    skill: SkillLevel,
    target_area: f64,
    preferred: &[Series],
    boosted: bool,
) -> f64 {
    let mut score = BASE_SCORE;
    let area = item.specs.area;

    // Series preference
    match preferred.iter().position(|s| *s == effective) {
        Some(index) => score += SERIES_RANK_BONUS_MAX - SERIES_RANK_BONUS_STEP * index as f64,
        None => {
            score -= if skill == SkillLevel::Advanced {
                SERIES_MISS_PENALTY_ADVANCED
            } else {
                SERIES_MISS_PENALTY
            }
        }
    }

    // Area proximity
    let deviation = (area - target_area).abs() / target_area;
    score += area_points(deviation);

    // Safety penalties
    if skill == SkillLevel::Beginner && area < target_area * BEGINNER_MIN_AREA_RATIO {
        score -= BEGINNER_UNDERSIZE_PENALTY;
    }
    if skill == SkillLevel::Advanced && area > target_area * ADVANCED_MAX_AREA_RATIO {
        score -= ADVANCED_OVERSIZE_PENALTY;
    }

    // Aspect ratio suitability; items without a figure skip the adjustment
    if let Some(aspect_ratio) = item.specs.aspect_ratio {
        score += aspect_ratio_points(skill, aspect_ratio);
    }

    if boosted {
        score += FEEDBACK_BONUS;
    }

    score.clamp(0.0, 100.0)
}

/// Step function over relative area deviation. The band edges are product
/// behavior; do not smooth them into a continuous curve.
fn area_points(deviation: f64) -> f64 {
    if deviation < 0.1 {
        20.0
    } else if deviation < 0.2 {
        10.0
    } else if deviation < 0.3 {
        0.0
    } else if deviation < 0.5 {
        -15.0
    } else {
        -35.0
    }
}

/// Skill-dependent aspect-ratio thresholds. Beginners are steered away from
/// high-aspect wings, intermediates toward the 9-11 sweet spot, advanced
/// riders toward higher ratios.
fn aspect_ratio_points(skill: SkillLevel, aspect_ratio: f64) -> f64 {
    match skill {
        SkillLevel::Beginner => {
            if aspect_ratio > 12.0 {
                -25.0
            } else if aspect_ratio > 10.0 {
                -10.0
            } else if aspect_ratio < 9.0 {
                5.0
            } else {
                0.0
            }
        }
        SkillLevel::Intermediate => {
            if aspect_ratio > 14.0 {
                -15.0
            } else if aspect_ratio > 12.0 {
                -5.0
            } else if (9.0..=11.0).contains(&aspect_ratio) {
                5.0
            } else {
                0.0
            }
        }
        SkillLevel::Advanced => {
            if aspect_ratio < 8.0 {
                -10.0
            } else if aspect_ratio > 10.0 {
                5.0
            } else {
                0.0
            }
        }
    }
}
