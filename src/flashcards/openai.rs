// ============================================================================
// OpenAI Flashcards Provider
// ============================================================================

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use recall_config::AiConfig;

use super::provider::{build_prompt, parse_flashcards};
use super::{Difficulty, Flashcard, FlashcardsProvider};
use crate::error::AppResult;

pub struct OpenAiFlashcards {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiFlashcards {
    pub fn new(http: reqwest::Client, config: &AiConfig) -> Self {
        Self {
            http,
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.clone(),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl FlashcardsProvider for OpenAiFlashcards {
    async fn generate_flashcards(
        &self,
        topic: &str,
        difficulty: Difficulty,
    ) -> AppResult<Vec<Flashcard>> {
        let prompt = build_prompt(topic, difficulty);

        let response: ChatCompletionResponse = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "temperature": 0.7,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("[]");

        Ok(parse_flashcards(content))
    }
}
