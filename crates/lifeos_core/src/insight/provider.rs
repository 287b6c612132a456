//! Provider boundary for insight text generation.

use super::InsightError;
use crate::config::InsightConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Turns a prompt into raw model text.
///
/// Implementations send exactly one request per call and do not retry.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Short provider name for log lines.
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String, InsightError>;
}

/// Provider used when no credential is configured; always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl InsightProvider for UnconfiguredProvider {
    fn name(&self) -> &'static str {
        "unconfigured"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, InsightError> {
        Err(InsightError::NotConfigured)
    }
}

/// Generative Language API `generateContent` client.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiProvider {
    pub fn from_config(config: &InsightConfig) -> Result<Self, InsightError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(InsightError::NotConfigured)?
            .to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl InsightProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, InsightError> {
        let body = serde_json::json!({
            "contents": [ { "parts": [ { "text": prompt } ] } ],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(InsightError::Status {
                status: status.as_u16(),
                body: crate::logging::sanitize_message(&text, 200),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|err| InsightError::Malformed(err.to_string()))?;
        extract_candidate_text(&value).ok_or(InsightError::EmptyResponse)
    }
}

/// Concatenates the text parts of the first candidate.
///
/// Returns `None` when the candidate carries no non-blank text.
pub fn extract_candidate_text(value: &serde_json::Value) -> Option<String> {
    let parts = value.pointer("/candidates/0/content/parts")?.as_array()?;
    let text = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
        .collect::<String>();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_candidate_text, GeminiProvider};
    use crate::config::InsightConfig;
    use crate::insight::InsightError;
    use serde_json::json;

    #[test]
    fn extracts_text_parts_from_first_candidate() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "{\"a\":" }, { "text": "1}" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        });
        assert_eq!(extract_candidate_text(&body).as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn missing_or_blank_candidates_yield_none() {
        assert_eq!(extract_candidate_text(&json!({})), None);
        let blank = json!({ "candidates": [ { "content": { "parts": [ { "text": " " } ] } } ] });
        assert_eq!(extract_candidate_text(&blank), None);
    }

    #[test]
    fn provider_requires_api_key() {
        let err = GeminiProvider::from_config(&InsightConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, InsightError::NotConfigured));
    }

    #[test]
    fn url_targets_generate_content_for_model() {
        let config = InsightConfig {
            api_key: Some("key".to_string()),
            endpoint: "https://example.test/v1beta/".to_string(),
            ..InsightConfig::default()
        };
        let provider = GeminiProvider::from_config(&config).unwrap();
        assert_eq!(
            provider.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
