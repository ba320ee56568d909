use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::NutritionAi;

/// Model identifier is fixed; there is no per-request model selection.
const GEMINI_MODEL: &str = "gemini-1.5-flash";
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Google Gemini generateContent client.
pub struct GeminiClient {
    api_key: String,
    model: &'static str,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: GEMINI_MODEL,
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        self.model
    }

    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, self.api_key
        )
    }
}

#[async_trait::async_trait]
impl NutritionAi for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        log::debug!("🤖 Sending request to Gemini with model: {}", self.model);

        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Gemini request failed to send")?;

        let status = response.status();
        log::debug!("📥 Gemini response status: {}", status);

        if !status.is_success() {
            // Error body goes to the log only; callers relay the failure
            // message to clients and must not leak upstream payloads.
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Gemini API error response: {}", error_text);
            anyhow::bail!("Gemini API error ({})", status);
        }

        let generate_response: GenerateResponse = response
            .json()
            .await
            .context("failed to decode Gemini response envelope")?;

        let text = generate_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .context("Gemini response contained no candidates")?;

        log::debug!("📄 Gemini raw response size: {} bytes", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_embeds_model_and_key() {
        let client = GeminiClient::new("test_key".to_string());
        let url = client.api_url();
        assert!(url.contains("gemini-1.5-flash:generateContent"));
        assert!(url.ends_with("key=test_key"));
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "halo".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "halo");
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"nutrisi\": {}}"}]}}
            ]
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap();
        assert_eq!(text, "{\"nutrisi\": {}}");
    }

    #[test]
    fn test_empty_candidates_deserializes() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
