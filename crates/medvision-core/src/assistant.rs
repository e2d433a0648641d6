//! The startup context: one immutable object holding the model client, the
//! generation parameters, the safety policy and the prompt.

use crate::config::{Config, GenerationConfig};
use crate::credential::Credential;
use crate::error::{AnalysisError, ConfigError};
use crate::llm::{AnalysisRequest, GeminiProvider, ModelReply, VisionProvider};
use crate::prompt::ANALYSIS_PROMPT;
use crate::safety::SafetyPolicy;
use crate::upload::UploadedImage;
use std::time::Duration;

/// Result of a completed model call.
#[derive(Debug, Clone)]
pub enum Analysis {
    /// The model produced text
    Report(ModelReply),
    /// The call succeeded but no text came back (e.g. safety filtering)
    NoResponse { reason: Option<String> },
}

/// Analysis request orchestrator.
///
/// Built once at startup by [`Assistant::from_config`], which fails unless a
/// credential resolves and the HTTP client initializes. Nothing in it can be
/// changed afterwards.
pub struct Assistant {
    provider: Box<dyn VisionProvider>,
    generation: GenerationConfig,
    safety: SafetyPolicy,
    max_upload_bytes: u64,
}

impl Assistant {
    /// Resolve the credential, build the HTTP client and the Gemini provider.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let credential = Credential::resolve(&config.gemini.api_key)?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("medvision/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        let generation = config.generation;
        let safety = SafetyPolicy::uniform(config.safety.threshold);
        let provider = GeminiProvider::new(
            client,
            &config.gemini.endpoint,
            &config.gemini.model,
            credential,
            generation,
            safety.clone(),
            Duration::from_millis(config.gemini.timeout_ms),
        );

        tracing::debug!(
            model = %config.gemini.model,
            endpoint = %config.gemini.endpoint,
            "Model client initialized"
        );

        Ok(Self {
            provider: Box::new(provider),
            generation,
            safety,
            max_upload_bytes: config.max_upload_bytes(),
        })
    }

    /// Build an assistant around an existing provider.
    pub fn with_provider(provider: Box<dyn VisionProvider>, config: &Config) -> Self {
        Self {
            provider,
            generation: config.generation,
            safety: SafetyPolicy::uniform(config.safety.threshold),
            max_upload_bytes: config.max_upload_bytes(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    pub fn safety(&self) -> &SafetyPolicy {
        &self.safety
    }

    pub fn timeout(&self) -> Duration {
        self.provider.timeout()
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Pair the image with the fixed prompt and send it.
    pub async fn analyze(&self, image: &UploadedImage) -> Result<Analysis, AnalysisError> {
        let request = AnalysisRequest::new(image, ANALYSIS_PROMPT);

        tracing::info!(
            provider = self.provider.name(),
            model = self.provider.model(),
            file = image.file_name(),
            "Requesting analysis"
        );

        let reply = self.provider.generate(&request).await?;

        if reply.text.is_empty() {
            return Ok(Analysis::NoResponse {
                reason: reply.empty_reason().map(str::to_string),
            });
        }

        tracing::info!(
            latency_ms = reply.latency_ms,
            tokens = ?reply.tokens_used,
            "Analysis received"
        );
        Ok(Analysis::Report(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::safety::HarmBlockThreshold;

    #[test]
    fn test_from_config_requires_credential() {
        let mut config = Config::default();
        config.gemini.api_key = "${MEDVISION_TEST_UNSET_KEY_9f2c}".to_string();

        let err = Assistant::from_config(&config).err().unwrap();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
        assert!(err.to_string().contains("MEDVISION_TEST_UNSET_KEY_9f2c"));
    }

    #[test]
    fn test_from_config_with_key() {
        let mut config = Config::default();
        config.gemini.api_key = "literal-key".to_string();
        config.gemini.timeout_ms = 5_000;
        config.safety.threshold = HarmBlockThreshold::BlockOnlyHigh;

        let assistant = Assistant::from_config(&config).unwrap();
        assert_eq!(assistant.provider_name(), "gemini");
        assert_eq!(assistant.model(), "gemini-1.5-pro-latest");
        assert_eq!(assistant.timeout(), Duration::from_secs(5));
        assert_eq!(*assistant.generation(), GenerationConfig::default());
        assert!(assistant
            .safety()
            .settings()
            .iter()
            .all(|s| s.threshold == HarmBlockThreshold::BlockOnlyHigh));
    }
}
