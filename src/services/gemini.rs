use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Discipline, SkillLevel};

/// Errors that can occur when calling the text-generation API
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error status: {0}")]
    Api(reqwest::StatusCode),

    #[error("no usable text in model reply")]
    EmptyReply,

    #[error("failed to parse model reply: {0}")]
    InvalidReply(String),
}

/// Structured enrichment result: short pros and cons for one candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProsCons {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

/// Prompt context for one candidate.
#[derive(Debug, Clone)]
pub struct EnrichmentInput {
    pub model_name: String,
    pub area: f64,
    pub series_label: String,
    pub weight_lbs: f64,
    pub skill: SkillLevel,
    pub discipline: Discipline,
    pub feedback: Vec<String>,
}

/// Client for the generative-text collaborator that writes pros/cons for
/// ranked candidates.
///
/// Enrichment can never fail a request: a missing API key, transport
/// failure, timeout, error status, or unparseable reply all fall back to
/// the local rule-based generator.
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

impl GeminiClient {
    pub fn new(base_url: String, model: String, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            model,
            api_key,
            client,
        }
    }

    /// Generate pros/cons for one candidate, falling back locally on any
    /// failure.
    pub async fn pros_cons(&self, input: &EnrichmentInput) -> ProsCons {
        let api_key = match self.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => key,
            None => {
                tracing::debug!("No generation API key configured, using fallback");
                return fallback_pros_cons(input);
            }
        };

        match self.request_pros_cons(api_key, input).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    "Generation call failed for {}, using fallback: {}",
                    input.model_name,
                    e
                );
                fallback_pros_cons(input)
            }
        }
    }

    async fn request_pros_cons(
        &self,
        api_key: &str,
        input: &EnrichmentInput,
    ) -> Result<ProsCons, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(api_key)
        );

        let payload = serde_json::json!({
            "contents": [{
                "parts": [{ "text": build_prompt(input) }]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 500,
            }
        });

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(GenerationError::Api(response.status()));
        }

        let json: serde_json::Value = response.json().await?;
        let text = json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|t| t.as_str())
            .ok_or(GenerationError::EmptyReply)?;

        let body = extract_json(text)
            .ok_or_else(|| GenerationError::InvalidReply("no JSON object in reply".into()))?;

        serde_json::from_str::<ProsCons>(body)
            .map_err(|e| GenerationError::InvalidReply(e.to_string()))
    }
}

fn build_prompt(input: &EnrichmentInput) -> String {
    let feedback_context = if input.feedback.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nReal rider feedback from the community:\n{}",
            input.feedback.join("\n")
        )
    };

    format!(
        "You are an expert foil advisor. Generate honest pros and cons for this recommendation.\n\n\
         RIDER PROFILE:\n\
         - Weight: {} lbs\n\
         - Skill: {}\n\
         - Discipline: {}\n\n\
         RECOMMENDED FOIL:\n\
         - Model: {}\n\
         - Area: {} cm²\n\
         - Series: {}{}\n\n\
         Generate 3 PROS and 2-3 CONS. Be specific to this rider's profile and foil characteristics.\n\
         Format as JSON:\n\
         {{\n  \"pros\": [\"Pro 1\", \"Pro 2\", \"Pro 3\"],\n  \"cons\": [\"Con 1\", \"Con 2\"]\n}}\n\n\
         Keep each point concise (10-15 words max). Focus on practical riding experience.",
        input.weight_lbs,
        input.skill,
        input.discipline,
        input.model_name,
        input.area,
        input.series_label,
        feedback_context
    )
}

/// Pull the first {...} block out of a free-text reply.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Deterministic local generator used when the external call is
/// unavailable. Size rules use the per-skill ideal of 7.8 / 6.0 / 4.8 cm²
/// per pound.
pub fn fallback_pros_cons(input: &EnrichmentInput) -> ProsCons {
    let mut pros: Vec<String> = Vec::new();
    let mut cons: Vec<String> = Vec::new();

    let area_per_lb = match input.skill {
        SkillLevel::Beginner => 7.8,
        SkillLevel::Intermediate => 6.0,
        SkillLevel::Advanced => 4.8,
    };
    let ideal_area = input.weight_lbs * area_per_lb;
    let size_diff = (input.area - ideal_area) / ideal_area * 100.0;

    if size_diff.abs() < 10.0 {
        pros.push(format!(
            "Ideal size for {:.0}lbs {} rider",
            input.weight_lbs, input.skill
        ));
    } else if size_diff > 10.0 {
        pros.push("Extra stability and easier takeoffs".to_string());
        cons.push("May feel slow in strong conditions".to_string());
    } else {
        pros.push("Fast and responsive feel".to_string());
        cons.push("Requires good technique for low-speed flight".to_string());
    }

    let series = input.series_label.as_str();
    if series.contains("PNG") {
        pros.push("Legendary pump and glide efficiency".to_string());
        pros.push("Connects bumps effortlessly".to_string());
        if input.discipline == Discipline::Wing {
            cons.push("Can feel slow in tight maneuvers".to_string());
        }
    } else if series == "Spitfire" {
        pros.push("Race-proven speed and upwind performance".to_string());
        pros.push("Excellent high-wind stability".to_string());
        if input.skill == SkillLevel::Beginner {
            cons.push("Advanced foil - steep learning curve".to_string());
        }
    } else if series == "Surge" {
        pros.push("Perfect balance of pump and turning".to_string());
        pros.push("Versatile across conditions".to_string());
    } else if series == "BSC" {
        pros.push("Forgiving and confidence-inspiring".to_string());
        pros.push("Wide speed range for learning".to_string());
        if input.skill == SkillLevel::Advanced {
            cons.push("Less responsive than high-aspect options".to_string());
        }
    } else if series.contains("ART") {
        pros.push("Exceptional glide and efficiency".to_string());
        pros.push("High aspect feel with manageable control".to_string());
        cons.push("Premium price point".to_string());
    }

    if input.discipline == Discipline::Parawing && (series.contains("PNG") || series == "Spitfire")
    {
        pros.push("Optimized for wind-powered efficiency".to_string());
    }

    pros.truncate(3);
    cons.truncate(2);

    ProsCons { pros, cons }
}
