use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ErrorResponse, Message, MessageKind, MessageStatus, SendMessageRequest, SendMessageResponse,
};
use crate::routes::search::AppState;
use crate::services::SendError;

/// Configure message-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/messages/send", web::post().to(send_message));
}

/// Send message endpoint
///
/// POST /api/v1/messages/send
///
/// Blank content is rejected before any backend call.
async fn send_message(
    state: web::Data<AppState>,
    req: web::Json<SendMessageRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let message = Message {
        id: uuid::Uuid::new_v4().to_string(),
        sender: req.sender.clone(),
        content: req.content.clone(),
        kind: MessageKind::Text,
        status: MessageStatus::Sent,
        created_at: chrono::Utc::now(),
    };

    match state
        .firebase
        .send_message(&req.conversation_id, &message)
        .await
    {
        Ok(message_id) => HttpResponse::Ok().json(SendMessageResponse { message_id }),
        Err(SendError::Content(e)) => {
            tracing::info!("Message blocked by validation: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Empty message".to_string(),
                message: "Message content is empty".to_string(),
                status_code: 400,
            })
        }
        Err(SendError::Backend(e)) => {
            tracing::error!("Failed to send message: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Could not send the message".to_string(),
                message: "Could not send the message. Please try again.".to_string(),
                status_code: 500,
            })
        }
    }
}
