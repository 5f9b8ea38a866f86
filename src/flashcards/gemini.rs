// ============================================================================
// Gemini Flashcards Provider
// ============================================================================

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use recall_config::AiConfig;

use super::provider::{build_prompt, parse_flashcards};
use super::{Difficulty, Flashcard, FlashcardsProvider};
use crate::error::AppResult;

pub struct GeminiFlashcards {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiFlashcards {
    pub fn new(http: reqwest::Client, config: &AiConfig) -> Self {
        Self {
            http,
            api_key: config.gemini_api_key.clone(),
            api_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl FlashcardsProvider for GeminiFlashcards {
    async fn generate_flashcards(
        &self,
        topic: &str,
        difficulty: Difficulty,
    ) -> AppResult<Vec<Flashcard>> {
        let prompt = build_prompt(topic, difficulty);
        let url = format!("{}/{}:generateContent", self.api_url, self.model);

        let response: GenerateContentResponse = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [{"parts": [{"text": prompt}]}],
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .and_then(|part| part.text.as_deref())
            .unwrap_or("[]");

        Ok(parse_flashcards(content))
    }
}
