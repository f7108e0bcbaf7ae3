use actix_web::{web, HttpResponse, Responder};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::models::{ErrorResponse, PublishOfferRequest, PublishOfferResponse};
use crate::routes::search::AppState;
use crate::services::PublishError;

/// Configure offer-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/offers", web::post().to(publish_offer));
}

/// Publish offer endpoint
///
/// POST /api/v1/offers
///
/// The image, when present, is uploaded before the record write; the record
/// then carries the resulting download address. A validation failure blocks
/// the flow before any backend call.
async fn publish_offer(
    state: web::Data<AppState>,
    req: web::Json<PublishOfferRequest>,
) -> impl Responder {
    let image = match &req.image_base64 {
        Some(encoded) => match BASE64.decode(encoded) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Invalid image payload".to_string(),
                    message: e.to_string(),
                    status_code: 400,
                });
            }
        },
        None => None,
    };

    let result = state
        .firebase
        .publish_offer(&req.form, req.employer_id.as_deref(), image.as_deref())
        .await;

    match result {
        Ok(offer) => HttpResponse::Ok().json(PublishOfferResponse {
            offer_id: offer.id,
            image_url: offer.image_url,
        }),
        Err(PublishError::Form(e)) => {
            tracing::info!("Publish blocked by validation: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        Err(PublishError::Backend(e)) => {
            tracing::error!("Failed to publish offer: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Could not publish the offer".to_string(),
                message: "Could not publish the offer. Please try again.".to_string(),
                status_code: 500,
            })
        }
    }
}
