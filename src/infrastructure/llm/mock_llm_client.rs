use crate::application::ports::{LlmClient, LlmClientError};

/// Echoes the prompt back. Lets the server run without a Gemini key.
pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        Ok(format!("Echo: {prompt}"))
    }
}
