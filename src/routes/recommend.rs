use std::collections::HashSet;
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{match_score, predictor, series, Ranker};
use crate::models::{
    ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, RecommendationEntry,
    RiderProfile, Series,
};
use crate::services::{CatalogStore, ContributionStore, EnrichmentInput, FeedbackIndex, GeminiClient, ProsCons};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub feedback: Arc<FeedbackIndex>,
    pub gemini: Arc<GeminiClient>,
    pub contributions: Arc<ContributionStore>,
    pub ranker: Ranker,
    pub generation: predictor::ModelGeneration,
    pub admin_key: Option<String>,
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_items: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "weight": 175,
///   "unit": "lbs",
///   "skill": "intermediate",
///   "discipline": "wing"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = RiderProfile {
        weight: req.weight,
        unit: req.unit,
        skill: req.skill,
        discipline: req.discipline,
    };

    tracing::info!(
        "Ranking catalog for {:.0} lbs {} {} rider",
        profile.weight_lbs(),
        profile.skill,
        profile.discipline
    );

    // Pre-compute the community-feedback boost set; the ranker itself stays
    // a pure function of its inputs.
    let boosted: HashSet<u32> = if state.feedback.is_empty() {
        HashSet::new()
    } else {
        state
            .catalog
            .items()
            .iter()
            .filter(|item| {
                let effective = series::effective_series(item);
                !state
                    .feedback
                    .excerpts_for(&series_label(effective, item), item.specs.area)
                    .is_empty()
            })
            .map(|item| item.id)
            .collect()
    };

    let result = state.ranker.rank(&profile, state.catalog.items(), &boosted);

    tracing::debug!(
        "{} of {} eligible items cleared the threshold",
        result.candidates.len(),
        result.total_eligible
    );

    let priorities = match_score::merge_overrides(
        match_score::default_priorities(profile.discipline),
        req.priorities.as_ref(),
    );

    // Enrich the finalized top-N concurrently; each candidate falls back
    // independently, so a slow or failed call only costs its own text.
    let mut enrichment_tasks = tokio::task::JoinSet::new();
    let mut entries: Vec<RecommendationEntry> = Vec::with_capacity(result.candidates.len());

    for (index, candidate) in result.candidates.iter().enumerate() {
        let item = &candidate.item;
        let label = series_label(candidate.series, item);
        let feedback = state.feedback.excerpts_for(&label, item.specs.area);

        let performance = predictor::predict_item(item, state.generation).map(|scores| {
            predictor::adjust_for_weight(
                scores,
                state.generation,
                profile.weight_kg(),
                item.specs.area,
            )
        });
        let performance_match = performance
            .as_ref()
            .map(|scores| match_score::match_score(scores, &priorities));

        let model = item.display_model();
        let url = if item.url.is_empty() {
            format!(
                "https://axisfoils.com/search?q={}",
                urlencoding::encode(&model)
            )
        } else {
            item.url.clone()
        };

        let input = EnrichmentInput {
            model_name: model.clone(),
            area: item.specs.area,
            series_label: label.clone(),
            weight_lbs: profile.weight_lbs(),
            skill: profile.skill,
            discipline: profile.discipline,
            feedback: feedback.clone(),
        };
        let gemini = state.gemini.clone();
        enrichment_tasks.spawn(async move { (index, gemini.pros_cons(&input).await) });

        entries.push(RecommendationEntry {
            model,
            series: label,
            area: item.specs.area,
            score: candidate.score,
            reasoning: candidate.reasoning.clone(),
            url,
            performance,
            match_score: performance_match,
            pros: Vec::new(),
            cons: Vec::new(),
            feedback,
        });
    }

    while let Some(joined) = enrichment_tasks.join_next().await {
        match joined {
            Ok((index, ProsCons { pros, cons })) => {
                entries[index].pros = pros;
                entries[index].cons = cons;
            }
            Err(e) => tracing::warn!("Enrichment task failed: {}", e),
        }
    }

    tracing::info!(
        "Returning {} recommendations (target area {:.0} cm²)",
        entries.len(),
        result.target_area
    );

    HttpResponse::Ok().json(RecommendResponse {
        recommendations: entries,
        target_area: result.target_area,
        total_eligible: result.total_eligible,
    })
}

/// Wire label for an effective series; unknown labels fall back to the raw
/// catalog string.
fn series_label(effective: Series, item: &crate::models::EquipmentItem) -> String {
    match effective {
        Series::Other => item.specs.series.clone(),
        known => known.to_string(),
    }
}
