use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service provider profile as stored under `/providers` in the realtime database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    pub name: String,
    #[serde(rename = "profileType", default)]
    pub profile_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(rename = "hourlyRate", default)]
    pub hourly_rate: u32,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
}

impl ProviderProfile {
    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }
}

fn default_true() -> bool {
    true
}

/// Offer record written to `/offers`, field for field what the backend stores
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    #[serde(rename = "type")]
    pub publication_type: String,
    pub title: String,
    pub description: String,
    pub publication_date: chrono::DateTime<chrono::Utc>,
    pub expiration_date: chrono::DateTime<chrono::Utc>,
    pub location: String,
    pub employer_id: Option<String>,
    pub category: String,
    pub required_skills: String,
    pub budget: String,
    pub assignment_location: String,
    pub image_url: Option<String>,
    pub status: OfferStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Active,
    Expired,
    Closed,
}

/// A message whose content is blank after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message content is empty")]
pub struct EmptyMessage;

/// Chat message, passed to the backend unmodified
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub kind: MessageKind,
    pub status: MessageStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Message {
    /// Blank-content gate, run before any backend call
    pub fn validate(&self) -> Result<(), EmptyMessage> {
        if self.content.trim().is_empty() {
            return Err(EmptyMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

/// Authenticated backend session returned by the identity service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub local_id: String,
    pub id_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_wire_format() {
        let offer = Offer {
            id: "-Nabc".to_string(),
            publication_type: "job_offer".to_string(),
            title: "Électricien".to_string(),
            description: "Installation complète".to_string(),
            publication_date: chrono::Utc::now(),
            expiration_date: chrono::Utc::now(),
            location: "Kinshasa, Gombe".to_string(),
            employer_id: Some("user1".to_string()),
            category: "Bâtiment, électricité, plomberie".to_string(),
            required_skills: "".to_string(),
            budget: "500".to_string(),
            assignment_location: "Kinshasa, Gombe".to_string(),
            image_url: None,
            status: OfferStatus::Active,
        };

        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(json["type"], "job_offer");
        assert_eq!(json["imageUrl"], serde_json::Value::Null);
        assert_eq!(json["status"], "active");
        assert_eq!(json["requiredSkills"], "");
    }

    #[test]
    fn test_message_content_gate() {
        let mut message = Message {
            id: "m1".to_string(),
            sender: "user1".to_string(),
            content: "Bonjour".to_string(),
            kind: MessageKind::Text,
            status: MessageStatus::Sent,
            created_at: chrono::Utc::now(),
        };
        assert!(message.validate().is_ok());

        message.content = "   ".to_string();
        assert_eq!(message.validate(), Err(EmptyMessage));
    }

    #[test]
    fn test_provider_defaults() {
        let profile: ProviderProfile = serde_json::from_value(serde_json::json!({
            "providerId": "p1",
            "name": "Jean K.",
        }))
        .unwrap();

        assert!(profile.is_active);
        assert!(!profile.verified());
        assert!(profile.availability.is_empty());
    }
}
