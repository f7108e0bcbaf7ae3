use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::criteria::FilterCriteria;
use crate::core::publish::OfferForm;

/// Request to search providers with the current filter criteria
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Request to run the simulated voice search over existing criteria
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceSearchRequest {
    #[serde(default)]
    pub criteria: FilterCriteria,
}

/// Request to publish an offer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishOfferRequest {
    #[serde(flatten)]
    pub form: OfferForm,
    #[serde(alias = "employer_id", rename = "employerId", default)]
    pub employer_id: Option<String>,
    /// Optional image payload, base64-encoded by the client.
    #[serde(rename = "imageBase64", default)]
    pub image_base64: Option<String>,
}

/// Request to create an account with email and password
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request to sign in; the identifier may be an email address or a phone number
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub identifier: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request to start phone sign-in by sending a verification code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhoneStartRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "phone_number", rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(alias = "recaptcha_token", rename = "recaptchaToken")]
    pub recaptcha_token: String,
}

/// Request to finish phone sign-in with the received code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhoneVerifyRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "session_info", rename = "sessionInfo")]
    pub session_info: String,
    #[validate(length(min = 1))]
    pub code: String,
}

/// Request to sign in with a third-party OAuth provider token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OAuthRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "provider_id", rename = "providerId")]
    pub provider_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "id_token", rename = "idToken")]
    pub id_token: String,
}

/// Request to send a chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "conversation_id", rename = "conversationId")]
    pub conversation_id: String,
    #[validate(length(min = 1))]
    pub sender: String,
    pub content: String,
}
