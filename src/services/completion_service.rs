use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    errors::AppResult,
    models::dto::completion::{ChatCompletion, ChatRequest},
};

/// One blocking round trip to a chat-completion provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> AppResult<ChatCompletion>;
}

/// Talks to any OpenAI-compatible endpoint (Groq by default).
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompletionClient {
    pub fn new(api_key: &SecretString, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: Client::with_config(config),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: ChatRequest) -> AppResult<ChatCompletion> {
        log::debug!(
            "Requesting completion from model {} ({} message(s))",
            request.model,
            request.messages.len()
        );

        let completion: ChatCompletion = self.client.chat().create_byot(request).await?;
        Ok(completion)
    }
}
