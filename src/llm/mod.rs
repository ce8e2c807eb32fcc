pub mod fake;
pub mod gemini;

pub use fake::FakeGenerator;
pub use gemini::GeminiClient;

use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    /// Transport failure or a rejection reported by the provider.
    #[error("{0}")]
    RequestFailed(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Unexpected response from model: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync + fmt::Debug {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    fn model_name(&self) -> &str;
}
