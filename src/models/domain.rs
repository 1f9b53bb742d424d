use serde::{Deserialize, Serialize};
use std::fmt;

/// Pounds per kilogram, used when normalizing rider weight to the
/// canonical scoring unit.
pub const LBS_PER_KG: f64 = 2.20462;

/// Unit tag attached to a rider's weight input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lbs,
}

/// Rider skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        };
        write!(f, "{}", label)
    }
}

/// Foiling discipline the rider is shopping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Wing,
    Parawing,
    Kite,
    Prone,
    Sup,
    Downwind,
    Pump,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Discipline::Wing => "wing",
            Discipline::Parawing => "parawing",
            Discipline::Kite => "kite",
            Discipline::Prone => "prone",
            Discipline::Sup => "sup",
            Discipline::Downwind => "downwind",
            Discipline::Pump => "pump",
        };
        write!(f, "{}", label)
    }
}

/// Product family. The current era is eligible for recommendations; legacy
/// families stay in the catalog for comparison views only. `Other` covers
/// labels the catalog may grow that the ranker does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Surge,
    Tempo,
    ArtV2,
    Fireball,
    PngV2,
    Spitfire,
    Art,
    Bsc,
    Hps,
    Sp,
    Png,
    Other,
}

impl Series {
    /// Parse a raw catalog series label. Disambiguation of era-ambiguous
    /// labels needs the display title too; see `core::series::effective_series`.
    pub fn parse(label: &str) -> Series {
        match label.trim() {
            "Surge" => Series::Surge,
            "Tempo" => Series::Tempo,
            "ART v2" | "ART V2" => Series::ArtV2,
            "Fireball" => Series::Fireball,
            "PNG v2" | "PNG V2" => Series::PngV2,
            "Spitfire" => Series::Spitfire,
            "ART" => Series::Art,
            "BSC" => Series::Bsc,
            "HPS" => Series::Hps,
            "SP" => Series::Sp,
            "PNG" => Series::Png,
            _ => Series::Other,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Series::Surge => "Surge",
            Series::Tempo => "Tempo",
            Series::ArtV2 => "ART v2",
            Series::Fireball => "Fireball",
            Series::PngV2 => "PNG V2",
            Series::Spitfire => "Spitfire",
            Series::Art => "ART",
            Series::Bsc => "BSC",
            Series::Hps => "HPS",
            Series::Sp => "SP",
            Series::Png => "PNG",
            Series::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// One front wing record from the pre-scraped catalog. Never mutated after
/// load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: u32,
    #[serde(default)]
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub url: String,
    pub specs: FoilSpecs,
}

impl EquipmentItem {
    /// Short model name derived from the display title, e.g.
    /// "AXIS ART v2 899 Carbon Front Wing" -> "ART v2 899".
    pub fn display_model(&self) -> String {
        let name = self.title.strip_prefix("AXIS ").unwrap_or(&self.title);
        let lower = name.to_lowercase();
        let mut cut = name.len();
        for marker in [" carbon", " ultra", " -", " hydrofoil"] {
            if let Some(pos) = lower.find(marker) {
                cut = cut.min(pos);
            }
        }
        name[..cut].trim_end().to_string()
    }
}

fn default_true() -> bool {
    true
}

/// Nested spec attributes of a front wing. Only area and the series label
/// are guaranteed; everything else depends on what the scrape recovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoilSpecs {
    pub area: f64,
    pub series: String,
    #[serde(rename = "aspectRatio", default)]
    pub aspect_ratio: Option<f64>,
    #[serde(default)]
    pub wingspan: Option<f64>,
    #[serde(default)]
    pub chord: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(rename = "rollMoment", default)]
    pub roll_moment: Option<f64>,
    #[serde(rename = "pitchMoment", default)]
    pub pitch_moment: Option<f64>,
}

/// Rider inputs for one recommendation request. Constructed per call and
/// never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiderProfile {
    pub weight: f64,
    pub unit: WeightUnit,
    pub skill: SkillLevel,
    pub discipline: Discipline,
}

impl RiderProfile {
    /// Weight in the canonical scoring unit. Kilogram inputs are rounded
    /// after conversion, matching the sizing heuristic's calibration.
    pub fn weight_lbs(&self) -> f64 {
        match self.unit {
            WeightUnit::Lbs => self.weight,
            WeightUnit::Kg => (self.weight * LBS_PER_KG).round(),
        }
    }

    /// Weight in kilograms, used by the performance weight adjusters.
    pub fn weight_kg(&self) -> f64 {
        match self.unit {
            WeightUnit::Kg => self.weight,
            WeightUnit::Lbs => self.weight / LBS_PER_KG,
        }
    }
}

/// The six predicted performance axes, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub lift: f64,
    pub glide: f64,
    pub speed: f64,
    pub carving: f64,
    pub pump: f64,
    pub comfort: f64,
}

/// Importance weights for combining the six axes into one match score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisPriorities {
    pub lift: f64,
    pub glide: f64,
    pub speed: f64,
    pub carving: f64,
    pub pump: f64,
    pub comfort: f64,
}

/// One ranked candidate. Produced and discarded within a single ranking
/// call.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub item: EquipmentItem,
    pub score: f64,
    pub series: Series,
    pub reasoning: String,
}

/// Community setup submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub weight: String,
    #[serde(rename = "weightUnit")]
    pub weight_unit: WeightUnit,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
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
    pub disciplines: Vec<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(rename = "upgradedFrom", default)]
    pub upgraded_from: Option<String>,
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(rename = "listAsContributor", default)]
    pub list_as_contributor: bool,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub source: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
}
