// ============================================================================
// AI Flashcards Provider
// ============================================================================
//
// Capability interface over the closed set of AI providers. Selection is a
// pure mapping from the provider tag to an implementation.
//
// Providers must absorb malformed model output: anything that does not parse
// as a flashcard array becomes an empty list, not a request failure.
// Transport failures still propagate.
//
// ============================================================================

use async_trait::async_trait;
use serde::Deserialize;

use recall_config::AiConfig;

use super::{Difficulty, Flashcard, GeminiFlashcards, OpenAiFlashcards};
use crate::error::AppResult;

/// Closed set of supported AI providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    OpenAi,
    Gemini,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::OpenAi => "openai",
            AiProvider::Gemini => "gemini",
        }
    }
}

impl std::str::FromStr for AiProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(AiProvider::OpenAi),
            "gemini" => Ok(AiProvider::Gemini),
            other => anyhow::bail!("unknown AI provider: {}", other),
        }
    }
}

#[async_trait]
pub trait FlashcardsProvider: Send + Sync {
    async fn generate_flashcards(
        &self,
        topic: &str,
        difficulty: Difficulty,
    ) -> AppResult<Vec<Flashcard>>;
}

/// Pure mapping from a provider tag to its implementation
pub fn create_provider(
    provider: AiProvider,
    http: &reqwest::Client,
    config: &AiConfig,
) -> Box<dyn FlashcardsProvider> {
    match provider {
        AiProvider::OpenAi => Box::new(OpenAiFlashcards::new(http.clone(), config)),
        AiProvider::Gemini => Box::new(GeminiFlashcards::new(http.clone(), config)),
    }
}

/// Prompt shared by all providers
pub(super) fn build_prompt(topic: &str, difficulty: Difficulty) -> String {
    format!(
        r#"Generate between 5 and 8 study flashcards about the topic: "{topic}".

Difficulty: {difficulty}.

RESPOND STRICTLY WITH VALID JSON.

Exact format:
[
  {{
    "question": "....",
    "answer": "....",
    "difficulty": "basic|intermediate|advanced",
    "tag": "concept|example|use-case|warning|tip"
  }}
]

Do not write any additional text, comments, markdown, or code fences. ONLY the JSON."#,
        topic = topic,
        difficulty = difficulty.as_str(),
    )
}

#[derive(Debug, Deserialize)]
struct FlashcardRaw {
    question: String,
    answer: String,
    difficulty: Difficulty,
    tag: String,
}

/// Parse model output into flashcards, absorbing anything malformed
pub fn parse_flashcards(content: &str) -> Vec<Flashcard> {
    let raw: Vec<FlashcardRaw> = match serde_json::from_str(content) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "AI provider returned unparsable flashcards, returning empty deck");
            return Vec::new();
        }
    };

    raw.into_iter()
        .map(|card| Flashcard {
            question: card.question,
            answer: card.answer,
            difficulty: card.difficulty,
            tag: card.tag,
        })
        .collect()
}
