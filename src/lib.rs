//! Foil Advisor - front wing recommendation service
//!
//! This library provides the scoring and prediction engine behind the foil
//! advisor: target sizing from rider inputs, rule-based catalog ranking,
//! and the linear performance-prediction models.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::predictor::ModelGeneration;
pub use crate::core::ranker::{RankResult, Ranker};
pub use crate::models::{
    Discipline, EquipmentItem, FoilSpecs, PerformanceScores, RiderProfile, ScoredCandidate,
    Series, SkillLevel, WeightUnit,
};
