use serde::{Deserialize, Serialize};

use crate::core::criteria::FilterCriteria;
use crate::models::domain::{AuthSession, ProviderProfile};

/// Response for the provider search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub providers: Vec<ProviderProfile>,
    pub total_candidates: usize,
}

/// Response for the voice search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSearchResponse {
    pub criteria: FilterCriteria,
    pub active: bool,
}

/// Response for the publish endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishOfferResponse {
    #[serde(rename = "offerId")]
    pub offer_id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Response for the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub session: AuthSession,
}

/// Response when a phone verification code was sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneStartResponse {
    #[serde(rename = "sessionInfo")]
    pub session_info: String,
}

/// Response for the send message endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
