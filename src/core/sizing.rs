use crate::models::{Discipline, RiderProfile, SkillLevel};

/// Target-area heuristic: cm² of projected area per pound of rider weight.
pub const AREA_PER_LB: f64 = 6.0;

/// Skill multiplier for the target area. Parawing carries its own table and
/// skips the discipline multiplier entirely; all other disciplines share the
/// general table.
pub fn skill_multiplier(discipline: Discipline, skill: SkillLevel) -> f64 {
    match (discipline, skill) {
        (Discipline::Parawing, SkillLevel::Beginner) => 1.0,
        (Discipline::Parawing, SkillLevel::Intermediate) => 0.92,
        (Discipline::Parawing, SkillLevel::Advanced) => 0.9,
        (_, SkillLevel::Beginner) => 1.3,
        (_, SkillLevel::Intermediate) => 1.0,
        (_, SkillLevel::Advanced) => 0.8,
    }
}

/// Discipline multiplier for the target area. Not consulted for parawing.
pub fn discipline_multiplier(discipline: Discipline) -> f64 {
    match discipline {
        Discipline::Wing => 1.0,
        Discipline::Kite => 0.9,
        Discipline::Prone => 0.85,
        Discipline::Sup => 1.2,
        Discipline::Downwind => 1.3,
        Discipline::Pump => 1.4,
        Discipline::Parawing => 1.0,
    }
}

/// Ideal projected area for a rider, in cm².
///
/// The skill multiplier applies before the discipline multiplier; the two
/// compound multiplicatively, so the order is part of the contract.
pub fn target_area(profile: &RiderProfile) -> f64 {
    let mut area = profile.weight_lbs() * AREA_PER_LB;
    area *= skill_multiplier(profile.discipline, profile.skill);
    if profile.discipline != Discipline::Parawing {
        area *= discipline_multiplier(profile.discipline);
    }
    area
}
