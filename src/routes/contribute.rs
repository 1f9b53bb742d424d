use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ContributeRequest, ContributeResponse, Contribution, ErrorResponse};
use crate::routes::recommend::AppState;

/// Configure contribution routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contributions", web::post().to(submit))
        .route("/contributions", web::get().to(export));
}

/// Contribution intake endpoint
///
/// POST /api/v1/contributions
async fn submit(
    state: web::Data<AppState>,
    req: web::Json<ContributeRequest>,
    http_req: HttpRequest,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for contribution: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing required fields".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_agent = http_req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let request = req.into_inner();
    let contribution = Contribution {
        id: format!("contrib_{}", uuid::Uuid::new_v4()),
        name: request.name,
        email: request.email,
        weight: request.weight,
        weight_unit: request.weight_unit,
        weight_kg: request.weight_kg,
        front_wing: request.front_wing,
        rear_wing: request.rear_wing,
        fuselage: request.fuselage,
        mast: request.mast,
        board: request.board,
        disciplines: request.disciplines,
        conditions: request.conditions,
        upgraded_from: request.upgraded_from,
        verdict: request.verdict,
        list_as_contributor: request.list_as_contributor,
        submitted_at: chrono::Utc::now(),
        source: "foil-advisor-contribute-form".to_string(),
        user_agent,
    };

    match state.contributions.record(&contribution).await {
        Ok(()) => HttpResponse::Ok().json(ContributeResponse {
            success: true,
            id: contribution.id,
            message: "Thank you for contributing!".to_string(),
        }),
        Err(e) => {
            tracing::error!("Failed to record contribution: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to process contribution".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Admin export endpoint, guarded by a static shared-secret bearer token.
///
/// GET /api/v1/contributions
async fn export(state: web::Data<AppState>, http_req: HttpRequest) -> impl Responder {
    let admin_key = match state.admin_key.as_deref().filter(|key| !key.is_empty()) {
        Some(key) => key,
        None => return unauthorized(),
    };

    let provided = http_req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if provided != Some(format!("Bearer {}", admin_key).as_str()) {
        return unauthorized();
    }

    HttpResponse::Ok().json(state.contributions.list().await)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "Unauthorized".to_string(),
        message: "Valid admin credentials required".to_string(),
        status_code: 401,
    })
}
