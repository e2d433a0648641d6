//! Model integration for image analysis.
//!
//! Provides the provider abstraction and the Gemini backend that turns one
//! uploaded image plus the fixed prompt into free-text analysis.

pub(crate) mod gemini;
pub(crate) mod provider;

pub use gemini::GeminiProvider;
pub use provider::{AnalysisRequest, ImageInput, ModelReply, Part, VisionProvider};
