//! Vision provider trait and request/response types.
//!
//! Defines the interface the model backend implements and the request
//! payload it receives: always one image part followed by one text part.

use crate::error::AnalysisError;
use crate::upload::UploadedImage;
use async_trait::async_trait;
use base64::Engine;
use std::time::Duration;

/// Base64-encoded image ready to send to a model API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    pub fn from_upload(image: &UploadedImage) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(image.bytes()),
            media_type: image.mime().as_str().to_string(),
        }
    }
}

/// One part of the request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Image(ImageInput),
    Text(String),
}

/// The payload for a single analysis call.
///
/// Built only through [`AnalysisRequest::new`], so it always holds exactly
/// one image part followed by one text part.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    parts: [Part; 2],
}

impl AnalysisRequest {
    pub fn new(image: &UploadedImage, prompt: &str) -> Self {
        Self {
            parts: [
                Part::Image(ImageInput::from_upload(image)),
                Part::Text(prompt.to_string()),
            ],
        }
    }

    /// Parts in wire order: image first, then prompt.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn image(&self) -> &ImageInput {
        match &self.parts[0] {
            Part::Image(image) => image,
            Part::Text(_) => unreachable!("first part is always the image"),
        }
    }

    pub fn prompt(&self) -> &str {
        match &self.parts[1] {
            Part::Text(text) => text,
            Part::Image(_) => unreachable!("second part is always the prompt"),
        }
    }
}

/// What the model sent back.
#[derive(Debug, Clone, Default)]
pub struct ModelReply {
    /// Generated text; empty when the model produced nothing
    pub text: String,
    /// Model identifier reported by the service (or configured)
    pub model: String,
    /// Why generation stopped, if reported (e.g. "STOP", "SAFETY")
    pub finish_reason: Option<String>,
    /// Why the prompt was blocked, if it was
    pub block_reason: Option<String>,
    /// Total tokens used, if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

impl ModelReply {
    /// Explanation for an empty reply, when the service gave one.
    pub fn empty_reason(&self) -> Option<&str> {
        self.block_reason
            .as_deref()
            .or(self.finish_reason.as_deref())
            .filter(|r| *r != "STOP")
    }
}

/// Trait that model backends implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the assistant holds a `Box<dyn VisionProvider>`).
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Configured model name.
    fn model(&self) -> &str;

    /// Send one analysis request and wait for the reply.
    async fn generate(&self, request: &AnalysisRequest) -> Result<ModelReply, AnalysisError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::ImageMime;

    #[test]
    fn test_image_input_from_upload() {
        let upload = UploadedImage::new("x.jpg", vec![0xFF, 0xD8, 0xFF], ImageMime::Jpeg);
        let input = ImageInput::from_upload(&upload);
        assert_eq!(input.media_type, "image/jpeg");
        assert_eq!(input.data, "/9j/");
    }

    #[test]
    fn test_request_orders_image_before_prompt() {
        let upload = UploadedImage::new("x.png", vec![1, 2, 3], ImageMime::Png);
        let request = AnalysisRequest::new(&upload, "describe");

        assert_eq!(request.parts().len(), 2);
        assert!(matches!(request.parts()[0], Part::Image(_)));
        assert!(matches!(request.parts()[1], Part::Text(ref t) if t == "describe"));
        assert_eq!(request.image().media_type, "image/png");
        assert_eq!(request.prompt(), "describe");
    }

    #[test]
    fn test_empty_reason_prefers_block_reason() {
        let reply = ModelReply {
            finish_reason: Some("SAFETY".to_string()),
            block_reason: Some("OTHER".to_string()),
            ..ModelReply::default()
        };
        assert_eq!(reply.empty_reason(), Some("OTHER"));
    }

    #[test]
    fn test_empty_reason_ignores_normal_stop() {
        let reply = ModelReply {
            finish_reason: Some("STOP".to_string()),
            ..ModelReply::default()
        };
        assert_eq!(reply.empty_reason(), None);
    }
}
