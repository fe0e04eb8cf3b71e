//! Gemini REST client implementing [`CorrectionOracle`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::document::{decode_review, Review, UploadedFile};

use super::prompt::{response_schema, INSTRUCTION_PROMPT};
use super::{CorrectionOracle, OracleError};

const MODEL: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

/// The single API credential. Injected into the client at construction so the
/// call path never reads ambient global state.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, OracleError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(OracleError::MissingCredential);
        }
        Ok(Self(key))
    }

    /// Read `GEMINI_API_KEY` from the process environment (after loading a
    /// `.env` file when present).
    pub fn from_env() -> Result<Self, OracleError> {
        dotenvy::dotenv().ok();
        match std::env::var(CREDENTIAL_VAR) {
            Ok(key) => Self::new(key),
            Err(_) => Err(OracleError::MissingCredential),
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    // The credential never appears in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Client for the `generateContent` endpoint with structured output.
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    key: ApiKey,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(key: ApiKey) -> Self {
        Self {
            http: reqwest::Client::new(),
            key,
            endpoint: format!("{API_BASE}/{MODEL}:generateContent"),
        }
    }

    /// Redirect the client at a different endpoint, for test servers.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[async_trait]
impl CorrectionOracle for GeminiClient {
    async fn review(&self, file: &UploadedFile) -> Result<Review, OracleError> {
        let request = json!({
            "contents": [{
                "parts": [
                    { "inline_data": { "mime_type": file.mime_type, "data": file.base64 } },
                    { "text": INSTRUCTION_PROMPT },
                ]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": 0.2,
            }
        });

        log::info!(
            "gửi '{}' ({} byte, {}) tới mô hình {}",
            file.name,
            file.size_bytes,
            file.mime_type,
            MODEL
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", self.key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::Communication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::warn!("mô hình trả về HTTP {status}");
            return Err(OracleError::Communication(format!("HTTP {status}: {detail}")));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Communication(e.to_string()))?;

        let text = envelope
            .candidates
            .into_iter()
            .find_map(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| OracleError::Communication("phản hồi rỗng từ mô hình".to_string()))?;

        let payload: serde_json::Value = serde_json::from_str(text.trim())
            .map_err(|e| OracleError::Communication(e.to_string()))?;

        Ok(decode_review(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_is_missing_credential() {
        assert!(matches!(ApiKey::new(""), Err(OracleError::MissingCredential)));
        assert!(matches!(
            ApiKey::new("   "),
            Err(OracleError::MissingCredential)
        ));
        assert!(ApiKey::new("AIza-test").is_ok());
    }

    #[test]
    fn test_api_key_debug_never_prints_the_secret() {
        let key = ApiKey::new("AIza-super-secret").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_client_endpoint_targets_generate_content() {
        let client = GeminiClient::new(ApiKey::new("AIza-test").unwrap());
        assert!(client.endpoint.ends_with("gemini-2.5-flash:generateContent"));
    }

    #[test]
    fn test_envelope_text_extraction_shape() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"a\":1}" }] }
            }]
        }"#;
        let envelope: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            envelope.candidates[0].content.as_ref().unwrap().parts[0]
                .text
                .as_deref(),
            Some("{\"a\":1}")
        );
    }
}
