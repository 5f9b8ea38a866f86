// ============================================================================
// Flashcards Routes
// ============================================================================
//
// POST /api/v1/flashcards/generate - generate and store a deck
// GET  /api/v1/flashcards/:id      - fetch a stored deck (or null)
//
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppResult;
use crate::flashcards::{create_provider, AiProvider, Deck, Difficulty};
use crate::routes::extractors::ValidatedJson;

fn is_difficulty(value: &str, _context: &()) -> garde::Result {
    value.parse::<Difficulty>().map(|_| ()).map_err(|_| {
        garde::Error::new("difficulty must be one of: basic, intermediate, advanced")
    })
}

fn is_ai_provider(value: &str, _context: &()) -> garde::Result {
    value
        .parse::<AiProvider>()
        .map(|_| ())
        .map_err(|_| garde::Error::new("provider must be one of: openai, gemini"))
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateDeckRequest {
    #[garde(length(min = 1))]
    pub topic: String,
    #[garde(custom(is_difficulty))]
    pub difficulty: String,
    #[garde(custom(is_ai_provider))]
    pub provider: String,
}

/// POST /api/v1/flashcards/generate
pub async fn generate_deck(
    State(ctx): State<Arc<AppContext>>,
    ValidatedJson(request): ValidatedJson<GenerateDeckRequest>,
) -> AppResult<impl IntoResponse> {
    // Both parses were validated above; a failure here is a programming error
    // and surfaces through the unexpected-failure path
    let difficulty: Difficulty = request.difficulty.parse()?;
    let provider: AiProvider = request.provider.parse()?;

    tracing::debug!(
        topic = %request.topic,
        difficulty = %difficulty.as_str(),
        provider = %provider.as_str(),
        "Generating flashcard deck"
    );

    let cards = create_provider(provider, &ctx.http, &ctx.config.ai)
        .generate_flashcards(&request.topic, difficulty)
        .await?;

    let deck = Deck {
        id: Uuid::new_v4(),
        topic: request.topic,
        difficulty,
        cards,
    };
    ctx.deck_store.save(deck.clone()).await;

    Ok((StatusCode::CREATED, Json(Envelope::success(&deck))))
}

/// GET /api/v1/flashcards/:id
pub async fn get_deck(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    // An unparsable id is simply a deck that does not exist
    let deck = match Uuid::try_parse(&id) {
        Ok(id) => ctx.deck_store.find_by_id(id).await,
        Err(_) => None,
    };

    let data = match deck {
        Some(deck) => Envelope::success(&deck),
        None => Envelope::success(Value::Null),
    };

    Ok((StatusCode::OK, Json(data)))
}
