// ============================================================================
// Flashcards Domain
// ============================================================================
//
// Study flashcard decks generated by pluggable AI providers and kept in an
// in-memory store.
//
// ============================================================================

mod gemini;
mod openai;
mod provider;
mod store;

pub use gemini::GeminiFlashcards;
pub use openai::OpenAiFlashcards;
pub use provider::{create_provider, parse_flashcards, AiProvider, FlashcardsProvider};
pub use store::{DeckRepository, InMemoryDeckStore};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Difficulty::Basic),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => anyhow::bail!("unknown difficulty: {}", other),
        }
    }
}

/// A single question/answer card
///
/// `tag` is free-form; providers are asked for one of
/// concept|example|use-case|warning|tip but the value is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    pub id: Uuid,
    pub topic: String,
    pub difficulty: Difficulty,
    pub cards: Vec<Flashcard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for value in ["basic", "intermediate", "advanced"] {
            let parsed: Difficulty = value.parse().unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Intermediate).unwrap(),
            "\"intermediate\""
        );
    }
}
