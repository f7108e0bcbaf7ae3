use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::core::publish::{MissingField, OfferForm};
use crate::models::{EmptyMessage, Message, Offer, ProviderProfile};

/// Errors that can occur when talking to the Firebase REST surface
#[derive(Debug, Error)]
pub enum FirebaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Errors from the publish flow
#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Form(#[from] MissingField),

    #[error(transparent)]
    Backend(#[from] FirebaseError),
}

/// Errors from the message send flow
#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Content(#[from] EmptyMessage),

    #[error(transparent)]
    Backend(#[from] FirebaseError),
}

/// Firebase REST client
///
/// Handles all communication with the managed backend:
/// - Realtime Database reads/writes (offers, providers, messages)
/// - Storage uploads for offer images
///
/// Base URLs are injectable so tests can point the client at a mock server.
pub struct FirebaseClient {
    database_url: String,
    storage_url: String,
    bucket: String,
    client: Client,
}

impl FirebaseClient {
    /// Create a new Firebase client
    pub fn new(database_url: String, storage_url: String, bucket: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            database_url,
            storage_url,
            bucket,
            client,
        }
    }

    /// Publish an offer.
    ///
    /// Validates the form first, then runs the strictly ordered flow: optional
    /// image upload, push-key allocation, record write carrying that key.
    /// Nothing is retried and nothing is written when any step fails.
    pub async fn publish_offer(
        &self,
        form: &OfferForm,
        employer_id: Option<&str>,
        image: Option<&[u8]>,
    ) -> Result<Offer, PublishError> {
        form.validate()?;

        let image_url = match image {
            Some(bytes) => Some(self.upload_offer_image(bytes).await?),
            None => None,
        };

        let key = self.push_key("offers").await?;
        let offer = form.to_offer(
            key.clone(),
            employer_id.map(str::to_string),
            image_url,
            chrono::Utc::now(),
        );

        self.put_record(&format!("offers/{}", key), &offer)
            .await
            .map_err(PublishError::Backend)?;

        tracing::info!("Published offer {} ({})", offer.id, offer.publication_type);

        Ok(offer)
    }

    /// Upload an offer image and return its durable download address
    pub async fn upload_offer_image(&self, bytes: &[u8]) -> Result<String, FirebaseError> {
        let object = format!("offers/{}.jpg", uuid::Uuid::new_v4());
        let url = format!(
            "{}/v0/b/{}/o?uploadType=media&name={}",
            self.storage_url.trim_end_matches('/'),
            self.bucket,
            urlencoding::encode(&object)
        );

        tracing::debug!("Uploading offer image to: {}", object);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "image/jpeg")
            .body(bytes.to_vec())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FirebaseError::ApiError(format!(
                "Failed to upload image: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let token = json
            .get("downloadTokens")
            .and_then(|t| t.as_str())
            .ok_or_else(|| FirebaseError::InvalidResponse("Missing download token".into()))?;

        Ok(format!(
            "{}/v0/b/{}/o/{}?alt=media&token={}",
            self.storage_url.trim_end_matches('/'),
            self.bucket,
            urlencoding::encode(&object),
            token
        ))
    }

    /// List provider profiles for the search pipeline
    pub async fn list_providers(&self) -> Result<Vec<ProviderProfile>, FirebaseError> {
        let url = format!(
            "{}/providers.json",
            self.database_url.trim_end_matches('/')
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FirebaseError::ApiError(format!(
                "Failed to list providers: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        // The database returns null for an empty path and a key->record map
        // otherwise. Records that fail to parse are skipped.
        let providers = match json {
            Value::Null => vec![],
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(_, doc)| serde_json::from_value(doc).ok())
                .collect(),
            other => {
                return Err(FirebaseError::InvalidResponse(format!(
                    "Expected provider map, got {}",
                    other
                )))
            }
        };

        tracing::debug!("Listed {} providers", providers.len());

        Ok(providers)
    }

    /// Send a chat message to a conversation, returning the push key.
    ///
    /// Blank content is rejected before any request goes out.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        message: &Message,
    ) -> Result<String, SendError> {
        message.validate()?;

        let key = self.push_message(conversation_id, message).await?;

        tracing::info!("Sent message {} to {}", message.id, conversation_id);

        Ok(key)
    }

    /// Append a chat message record under the conversation path
    async fn push_message(
        &self,
        conversation_id: &str,
        message: &Message,
    ) -> Result<String, FirebaseError> {
        let url = format!(
            "{}/messages/{}.json",
            self.database_url.trim_end_matches('/'),
            conversation_id
        );

        let response = self.client.post(&url).json(message).send().await?;

        if !response.status().is_success() {
            return Err(FirebaseError::ApiError(format!(
                "Failed to send message: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        json.get("name")
            .and_then(|n| n.as_str())
            .map(str::to_string)
            .ok_or_else(|| FirebaseError::InvalidResponse("Missing push key in response".into()))
    }

    /// Allocate a push key under the given database path
    async fn push_key(&self, path: &str) -> Result<String, FirebaseError> {
        let url = format!(
            "{}/{}.json",
            self.database_url.trim_end_matches('/'),
            path
        );

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FirebaseError::ApiError(format!(
                "Failed to allocate push key: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        json.get("name")
            .and_then(|n| n.as_str())
            .map(str::to_string)
            .ok_or_else(|| FirebaseError::InvalidResponse("Missing push key in response".into()))
    }

    /// Write a record at the given database path
    async fn put_record<T: serde::Serialize>(
        &self,
        path: &str,
        record: &T,
    ) -> Result<(), FirebaseError> {
        let url = format!(
            "{}/{}.json",
            self.database_url.trim_end_matches('/'),
            path
        );

        let response = self.client.put(&url).json(record).send().await?;

        if !response.status().is_success() {
            return Err(FirebaseError::ApiError(format!(
                "Failed to write record: {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firebase_client_creation() {
        let client = FirebaseClient::new(
            "https://jobcon-test.firebaseio.com".to_string(),
            "https://firebasestorage.googleapis.com".to_string(),
            "jobcon-test.appspot.com".to_string(),
        );

        assert_eq!(client.database_url, "https://jobcon-test.firebaseio.com");
        assert_eq!(client.bucket, "jobcon-test.appspot.com");
    }
}
