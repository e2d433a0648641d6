//! Gemini provider using the `generateContent` REST endpoint.
//!
//! Sends the image as an `inlineData` part followed by the prompt text, with
//! the generation config and safety settings fixed at construction.

use super::provider::{AnalysisRequest, ModelReply, Part, VisionProvider};
use crate::config::GenerationConfig;
use crate::credential::Credential;
use crate::error::AnalysisError;
use crate::safety::{SafetyPolicy, SafetySetting};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Gemini provider. Holds everything a request needs; nothing changes after `new`.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    credential: Credential,
    generation: GenerationConfig,
    safety: SafetyPolicy,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(
        client: reqwest::Client,
        endpoint: &str,
        model: &str,
        credential: Credential,
        generation: GenerationConfig,
        safety: SafetyPolicy,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.trim_start_matches("models/").to_string(),
            credential,
            generation,
            safety,
            timeout,
            client,
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn build_body<'a>(&'a self, request: &'a AnalysisRequest) -> GenerateContentRequest<'a> {
        let parts = request
            .parts()
            .iter()
            .map(|part| match part {
                Part::Image(image) => WirePart::InlineData {
                    inline_data: InlineData {
                        mime_type: &image.media_type,
                        data: &image.data,
                    },
                },
                Part::Text(text) => WirePart::Text { text },
            })
            .collect();

        GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: WireGenerationConfig {
                temperature: self.generation.temperature,
                top_p: self.generation.top_p,
                top_k: (self.generation.top_k > 0).then_some(self.generation.top_k),
                max_output_tokens: self.generation.max_output_tokens,
            },
            safety_settings: self.safety.settings(),
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: WireGenerationConfig,
    safety_settings: &'a [SafetySetting],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<WirePart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePart<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    max_output_tokens: u32,
}

// --- Response types ---

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct Candidate {
    content: Option<ResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct UsageMetadata {
    total_token_count: Option<u32>,
}

#[async_trait]
impl VisionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &AnalysisRequest) -> Result<ModelReply, AnalysisError> {
        let start = Instant::now();
        let body = self.build_body(request);

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.credential.expose())
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AnalysisError::Llm {
                message: format!("Gemini HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let parsed: GenerateContentResponse =
            resp.json().await.map_err(|e| self.transport_error(e))?;

        let first = parsed.candidates.into_iter().next();
        let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
        let text = first
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(ModelReply {
            text,
            model: parsed.model_version.unwrap_or_else(|| self.model.clone()),
            finish_reason,
            block_reason: parsed.prompt_feedback.and_then(|f| f.block_reason),
            tokens_used: parsed.usage_metadata.and_then(|u| u.total_token_count),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl GeminiProvider {
    fn transport_error(&self, e: reqwest::Error) -> AnalysisError {
        if e.is_timeout() {
            AnalysisError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else if e.is_decode() {
            AnalysisError::Llm {
                message: format!("Failed to parse Gemini response: {e}"),
                status_code: None,
            }
        } else {
            AnalysisError::Llm {
                message: format!("Gemini request failed: {e}"),
                status_code: None,
            }
        }
    }
}
