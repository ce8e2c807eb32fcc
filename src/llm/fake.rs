use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use super::{LlmError, TextGenerator};

#[derive(Debug)]
pub struct FakeGenerator {
    reply: Result<String, LlmError>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    /// Always answer with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `message`, as if the upstream call had been rejected.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(LlmError::RequestFailed(message.into())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());
        self.reply.clone()
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replying_records_prompts() {
        let generator = FakeGenerator::replying("world");
        assert_eq!(generator.generate("hello").await.unwrap(), "world");
        assert_eq!(generator.generate("again").await.unwrap(), "world");
        assert_eq!(generator.prompts(), vec!["hello", "again"]);
    }

    #[tokio::test]
    async fn test_failing() {
        let generator = FakeGenerator::failing("quota exceeded");
        let err = generator.generate("hello").await.unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
