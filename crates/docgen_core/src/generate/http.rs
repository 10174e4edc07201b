//! HTTP client for the generative-language API.
//!
//! # Responsibility
//! - Invoke the configured model with a prompt and optionally a JSON
//!   string-array output schema.
//! - Flatten the candidate/part response shape into plain text.
//!
//! # Invariants
//! - One request per invocation against a fixed deadline; no retry.

use crate::config::GeneratorConfig;
use crate::generate::prompts::parse_title_array;
use crate::generate::{GenerateError, GenerateResult, TextGenerator};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    fn string_array() -> Self {
        Self {
            response_mime_type: "application/json",
            response_schema: serde_json::json!({
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }),
        }
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

/// Client for the hosted `models/{model}:generateContent` endpoint.
#[derive(Debug)]
pub struct HttpTextGenerator {
    config: GeneratorConfig,
    client: Client,
}

impl HttpTextGenerator {
    /// Builds a client for the configured endpoint and model.
    ///
    /// # Errors
    /// - `GenerateError::NotConfigured` when URL or API key are missing.
    pub fn try_new(config: GeneratorConfig) -> GenerateResult<Self> {
        if !config.is_configured() {
            return Err(GenerateError::NotConfigured);
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, client })
    }

    fn invoke(&self, prompt: &str, schema: Option<GenerationConfig>) -> GenerateResult<String> {
        let url = format!(
            "{}/v1/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: schema,
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = response.status();
        let raw = response.text()?;
        if !status.is_success() {
            return Err(GenerateError::Backend {
                status: status.as_u16(),
                message: raw.trim().chars().take(200).collect(),
            });
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|err| GenerateError::InvalidPayload(err.to_string()))?;
        let text = decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }
        Ok(text)
    }
}

impl TextGenerator for HttpTextGenerator {
    fn generate_text(&self, prompt: &str) -> GenerateResult<String> {
        self.invoke(prompt, None)
    }

    fn generate_titles(&self, prompt: &str) -> GenerateResult<Vec<String>> {
        let raw = self.invoke(prompt, Some(GenerationConfig::string_array()))?;
        parse_title_array(&raw).ok_or_else(|| {
            GenerateError::InvalidPayload("expected a JSON array of strings".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{GenerateContentRequest, GenerationConfig, HttpTextGenerator};
    use crate::config::GeneratorConfig;
    use crate::generate::GenerateError;

    #[test]
    fn try_new_rejects_unconfigured_endpoint() {
        let err = HttpTextGenerator::try_new(GeneratorConfig::new("", "", ""))
            .expect_err("must be rejected");
        assert!(matches!(err, GenerateError::NotConfigured));
    }

    #[test]
    fn request_body_serializes_schema_in_camel_case() {
        let body = GenerateContentRequest {
            contents: vec![],
            generation_config: Some(GenerationConfig::string_array()),
        };
        let json = serde_json::to_value(&body).expect("request should serialize");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn request_without_schema_omits_generation_config() {
        let body = GenerateContentRequest {
            contents: vec![],
            generation_config: None,
        };
        let json = serde_json::to_string(&body).expect("request should serialize");
        assert!(!json.contains("generationConfig"));
    }
}
