//! MedVision Core - medical image analysis through a hosted vision model.
//!
//! MedVision pairs one uploaded image with a fixed instructional prompt,
//! sends both to Gemini, and hands back the model's text unchanged.
//!
//! # Architecture
//!
//! ```text
//! Config + GOOGLE_API_KEY → Assistant (immutable) ─┐
//! Upload → Session ─ generate ─→ [image, prompt] ──┴→ Gemini → ClickOutcome
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use medvision_core::{Assistant, ClickOutcome, Config, Session, UploadedImage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load()?;
//!     let assistant = Assistant::from_config(&config)?;
//!
//!     let mut session = Session::new();
//!     session.upload(UploadedImage::from_path("./xray.jpg".as_ref(), config.max_upload_bytes())?);
//!     if let ClickOutcome::Report(reply) = session.generate(&assistant).await {
//!         println!("{}", reply.text);
//!     }
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod config;
pub mod credential;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod safety;
pub mod session;
pub mod upload;

pub use assistant::{Analysis, Assistant};
pub use config::{Config, GenerationConfig};
pub use credential::{Credential, API_KEY_ENV};
pub use error::{AnalysisError, ConfigError};
pub use llm::{AnalysisRequest, ModelReply, VisionProvider};
pub use prompt::{ANALYSIS_PROMPT, REPORT_SECTIONS, RESULT_HEADING};
pub use safety::{HarmBlockThreshold, HarmCategory, SafetyPolicy, SafetySetting};
pub use session::{ClickOutcome, Session};
pub use upload::{ImageMime, ImagePreview, UploadedImage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
