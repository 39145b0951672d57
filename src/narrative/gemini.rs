//! Gemini API client for the resume critique
//!
//! Requires the `ai` feature to be enabled:
//! ```toml
//! atscore = { version = "1", features = ["ai"] }
//! ```

use super::{NarrativeError, NarrativeGenerator};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const PLACEHOLDER_KEY: &str = "your_gemini_api_key_here";

/// Gemini API client
#[cfg_attr(not(feature = "ai"), allow(dead_code))]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client from GEMINI_API_KEY and GEMINI_MODEL
    pub fn from_env() -> Result<Self, NarrativeError> {
        let api_key = validate_api_key(std::env::var("GEMINI_API_KEY").ok())?;
        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self::with_key(api_key).model(&model))
    }

    /// Create a client with a specific API key
    pub fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point at a different endpoint (proxies, tests)
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send a prompt to Gemini and return the response text
    #[cfg(feature = "ai")]
    pub fn send_request(&self, prompt: &str) -> Result<String, NarrativeError> {
        use serde_json::json;
        use std::time::Duration;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| NarrativeError::Request(e.to_string()))?;

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let response = client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| NarrativeError::Request(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NarrativeError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(NarrativeError::Api(format!("{}: {}", status, error_text)));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| NarrativeError::InvalidResponse(e.to_string()))?;

        candidate_text(&json)
            .ok_or_else(|| NarrativeError::InvalidResponse("No text in response".to_string()))
    }

    /// Stub implementation when ai feature is disabled
    #[cfg(not(feature = "ai"))]
    pub fn send_request(&self, _prompt: &str) -> Result<String, NarrativeError> {
        Err(NarrativeError::FeatureDisabled)
    }
}

impl NarrativeGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        self.send_request(prompt)
    }
}

/// Reject a missing, blank or placeholder key
pub fn validate_api_key(key: Option<String>) -> Result<String, NarrativeError> {
    match key {
        Some(key) if !key.trim().is_empty() && key.trim() != PLACEHOLDER_KEY => {
            Ok(key.trim().to_string())
        }
        _ => Err(NarrativeError::NoApiKey),
    }
}

/// Concatenated text parts of the first candidate
pub fn candidate_text(json: &serde_json::Value) -> Option<String> {
    let parts = json["candidates"]
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Check if the AI feature is available
pub fn is_ai_available() -> bool {
    cfg!(feature = "ai")
}
