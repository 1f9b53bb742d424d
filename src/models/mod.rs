// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AxisPriorities, Contribution, Discipline, EquipmentItem, FoilSpecs, PerformanceScores,
    RiderProfile, ScoredCandidate, Series, SkillLevel, WeightUnit, LBS_PER_KG,
};
pub use requests::{ContributeRequest, PriorityOverrides, RecommendRequest};
pub use responses::{
    ContributeResponse, ErrorResponse, HealthResponse, RecommendResponse, RecommendationEntry,
};
