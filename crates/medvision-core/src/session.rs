//! Per-user interaction state: the current upload and the generate action.
//!
//! Each generate call is one pass through
//! `Idle → (NoImage | Requesting → Report | NoResponse | Failed) → Idle`.
//! Every outcome leaves the session usable for the next action.

use crate::assistant::{Analysis, Assistant};
use crate::llm::ModelReply;
use crate::upload::{ImagePreview, UploadedImage};

/// Shown when generate is invoked before any upload.
pub const NO_IMAGE_MESSAGE: &str = "Please upload an image before generating analysis.";

/// Shown when the model returns no text.
pub const NO_RESPONSE_MESSAGE: &str = "No response received. Please try again.";

/// Shown when the model call fails; details go to the log only.
pub const FAILURE_MESSAGE: &str = "An error occurred while processing the image.";

/// What a single generate action produced.
#[derive(Debug, Clone)]
pub enum ClickOutcome {
    /// No image was uploaded; nothing was sent
    NoImage,
    /// The model's text, to be displayed verbatim
    Report(ModelReply),
    /// The call succeeded without text
    NoResponse { reason: Option<String> },
    /// The call failed; `message` is safe to show to the user
    Failed { message: String },
}

/// Holds at most one uploaded image between actions.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<UploadedImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current upload and return its preview.
    pub fn upload(&mut self, image: UploadedImage) -> ImagePreview {
        let preview = image.preview();
        self.image = Some(image);
        preview
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn current(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    /// Run one generate action.
    ///
    /// The upload is released once a report is produced. After an empty or
    /// failed reply it stays, so generating again retries the same image.
    pub async fn generate(&mut self, assistant: &Assistant) -> ClickOutcome {
        let Some(image) = self.image.as_ref() else {
            tracing::debug!("Generate requested without an upload");
            return ClickOutcome::NoImage;
        };

        match assistant.analyze(image).await {
            Ok(Analysis::Report(reply)) => {
                self.image = None;
                ClickOutcome::Report(reply)
            }
            Ok(Analysis::NoResponse { reason }) => {
                tracing::warn!(
                    reason = reason.as_deref().unwrap_or("unspecified"),
                    "No response received from the model"
                );
                ClickOutcome::NoResponse { reason }
            }
            Err(e) => {
                tracing::error!(error = %e, file = image.file_name(), "Error during analysis");
                ClickOutcome::Failed {
                    message: FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}
