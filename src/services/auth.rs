use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

use crate::models::AuthSession;

/// Errors that can occur when talking to the identity service
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Backend error message, surfaced verbatim to the user
    #[error("{0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Identity Toolkit REST client
///
/// Covers the three sign-in paths the app exposes: email/password, phone
/// number (two-step code flow), and third-party OAuth provider tokens.
pub struct AuthClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl AuthClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }

    /// Create an account with email and password
    pub async fn sign_up_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let json = self
            .call(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        session_from(json)
    }

    /// Sign in with email and password
    pub async fn sign_in_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let json = self
            .call(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        session_from(json)
    }

    /// Start phone sign-in; returns the session info needed to verify the code
    pub async fn send_phone_code(
        &self,
        phone_number: &str,
        recaptcha_token: &str,
    ) -> Result<String, AuthError> {
        let json = self
            .call(
                "sendVerificationCode",
                json!({
                    "phoneNumber": phone_number,
                    "recaptchaToken": recaptcha_token,
                }),
            )
            .await?;

        json.get("sessionInfo")
            .and_then(|s| s.as_str())
            .map(str::to_string)
            .ok_or_else(|| AuthError::InvalidResponse("Missing sessionInfo".into()))
    }

    /// Finish phone sign-in with the code the user received
    pub async fn sign_in_phone(
        &self,
        session_info: &str,
        code: &str,
    ) -> Result<AuthSession, AuthError> {
        let json = self
            .call(
                "signInWithPhoneNumber",
                json!({
                    "sessionInfo": session_info,
                    "code": code,
                }),
            )
            .await?;

        session_from(json)
    }

    /// Sign in with a third-party OAuth provider token
    pub async fn sign_in_oauth(
        &self,
        provider_id: &str,
        id_token: &str,
    ) -> Result<AuthSession, AuthError> {
        let json = self
            .call(
                "signInWithIdp",
                json!({
                    "postBody": format!("id_token={}&providerId={}", id_token, provider_id),
                    "requestUri": "http://localhost",
                    "returnSecureToken": true,
                    "returnIdpCredential": true,
                }),
            )
            .await?;

        session_from(json)
    }

    async fn call(&self, operation: &str, payload: Value) -> Result<Value, AuthError> {
        let url = format!(
            "{}/v1/accounts:{}?key={}",
            self.endpoint.trim_end_matches('/'),
            operation,
            self.api_key
        );

        tracing::debug!("Calling identity service: accounts:{}", operation);

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        let json: Value = response.json().await?;

        if !status.is_success() {
            // The backend message is shown to the user verbatim.
            let message = json
                .pointer("/error/message")
                .and_then(|m| m.as_str())
                .unwrap_or("UNKNOWN_ERROR");
            return Err(AuthError::Api(message.to_string()));
        }

        Ok(json)
    }
}

fn session_from(json: Value) -> Result<AuthSession, AuthError> {
    serde_json::from_value(json)
        .map_err(|e| AuthError::InvalidResponse(format!("Failed to parse session: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_parsing() {
        let session = session_from(json!({
            "localId": "uid1",
            "idToken": "tok",
            "refreshToken": "ref",
            "email": "a@b.cd",
            "expiresIn": "3600",
        }))
        .unwrap();

        assert_eq!(session.local_id, "uid1");
        assert_eq!(session.email.as_deref(), Some("a@b.cd"));
    }

    #[test]
    fn test_session_parsing_rejects_missing_token() {
        assert!(session_from(json!({ "localId": "uid1" })).is_err());
    }
}
