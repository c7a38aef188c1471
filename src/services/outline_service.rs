use std::sync::Arc;

use crate::{
    constants::prompts::{course_outline_prompt, COMPLETION_MODEL, COMPLETION_TEMPERATURE},
    errors::{AppError, AppResult},
    models::dto::completion::{ChatMessage, ChatRequest},
    services::{completion_service::CompletionClient, markdown::render_markdown},
};

/// Turns a free-text prompt into an HTML course outline.
pub struct OutlineService {
    client: Arc<dyn CompletionClient>,
}

impl OutlineService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub fn build_request(prompt: &str) -> ChatRequest {
        ChatRequest {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![ChatMessage::system(course_outline_prompt(prompt))],
            temperature: COMPLETION_TEMPERATURE,
        }
    }

    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let completion = self.client.complete(Self::build_request(prompt)).await?;

        let content = completion.first_content().ok_or_else(|| {
            AppError::Completion("Completion response contained no message content".to_string())
        })?;

        Ok(render_markdown(content))
    }
}
