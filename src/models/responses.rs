use serde::{Deserialize, Serialize};

use crate::models::domain::PerformanceScores;

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<RecommendationEntry>,
    #[serde(rename = "targetArea")]
    pub target_area: f64,
    #[serde(rename = "totalEligible")]
    pub total_eligible: usize,
}

/// One ranked recommendation on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub model: String,
    pub series: String,
    pub area: f64,
    pub score: f64,
    pub reasoning: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub performance: Option<PerformanceScores>,
    #[serde(rename = "matchScore", skip_serializing_if = "Option::is_none", default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub feedback: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "catalogItems")]
    pub catalog_items: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Contribution intake response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributeResponse {
    pub success: bool,
    pub id: String,
    pub message: String,
}
