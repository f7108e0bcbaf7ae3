use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{Searcher, VoiceSearch};
use crate::models::{
    ErrorResponse, HealthResponse, SearchRequest, SearchResponse, VoiceSearchRequest,
    VoiceSearchResponse,
};
use crate::services::{AuthClient, FirebaseClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub firebase: Arc<FirebaseClient>,
    pub auth: Arc<AuthClient>,
    pub searcher: Searcher,
    pub voice: Arc<VoiceSearch>,
}

/// Configure search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search/providers", web::post().to(search_providers))
        .route("/search/voice", web::post().to(voice_search));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Provider search endpoint
///
/// POST /api/v1/search/providers
///
/// Request body:
/// ```json
/// {
///   "criteria": { "jobCategory": "Nettoyage", "location": { "city": "Gombe" } },
///   "limit": 20
/// }
/// ```
async fn search_providers(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    let candidates = match state.firebase.list_providers().await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to list providers: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list providers".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state.searcher.search(&req.criteria, candidates, req.limit);

    tracing::info!(
        "Returning {} providers (from {} candidates)",
        result.providers.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(SearchResponse {
        providers: result.providers,
        total_candidates: result.total_candidates,
    })
}

/// Simulated voice search endpoint
///
/// POST /api/v1/search/voice
///
/// Runs the one-shot recognition stub and returns the caller's criteria with
/// the recognized terms applied, plus the final state of the active flag.
async fn voice_search(
    state: web::Data<AppState>,
    req: web::Json<VoiceSearchRequest>,
) -> impl Responder {
    let outcome = state.voice.recognize().await;

    let mut criteria = req.into_inner().criteria;
    outcome.apply_to(&mut criteria);

    HttpResponse::Ok().json(VoiceSearchResponse {
        criteria,
        active: state.voice.is_active(),
    })
}
