use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Discipline, SkillLevel, WeightUnit};

/// Request for ranked recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(min = 30.0, max = 450.0))]
    pub weight: f64,
    #[serde(default = "default_unit")]
    pub unit: WeightUnit,
    pub skill: SkillLevel,
    pub discipline: Discipline,
    #[serde(default)]
    pub priorities: Option<PriorityOverrides>,
}

fn default_unit() -> WeightUnit {
    WeightUnit::Lbs
}

/// Optional per-axis importance overrides; unset axes fall back to the
/// discipline defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PriorityOverrides {
    #[serde(default)]
    pub lift: Option<f64>,
    #[serde(default)]
    pub glide: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub carving: Option<f64>,
    #[serde(default)]
    pub pump: Option<f64>,
    #[serde(default)]
    pub comfort: Option<f64>,
}

/// Community setup submission payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContributeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub weight: String,
    #[serde(rename = "weightUnit", default = "default_contribution_unit")]
    pub weight_unit: WeightUnit,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
    #[validate(length(min = 1))]
    #[serde(rename = "frontWing")]
    pub front_wing: String,
    #[serde(rename = "rearWing", default)]
    pub rear_wing: Option<String>,
    #[serde(default)]
    pub fuselage: Option<String>,
    #[serde(default)]
    pub mast: Option<String>,
    #[serde(default)]
    pub board: Option<String>,
    #[validate(length(min = 1))]
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(rename = "upgradedFrom", default)]
    pub upgraded_from: Option<String>,
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(rename = "listAsContributor", default)]
    pub list_as_contributor: bool,
}

fn default_contribution_unit() -> WeightUnit {
    WeightUnit::Kg
}
