// ============================================================================
// Deck Store
// ============================================================================
//
// Minimal key-value contract over generated decks. The in-memory
// implementation is the only one the service ships; the trait is the seam a
// persistent store would plug into.
//
// ============================================================================

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Deck;

#[async_trait]
pub trait DeckRepository: Send + Sync {
    async fn save(&self, deck: Deck);
    async fn find_by_id(&self, id: Uuid) -> Option<Deck>;
}

#[derive(Default)]
pub struct InMemoryDeckStore {
    decks: RwLock<HashMap<Uuid, Deck>>,
}

impl InMemoryDeckStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeckRepository for InMemoryDeckStore {
    async fn save(&self, deck: Deck) {
        self.decks.write().await.insert(deck.id, deck);
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Deck> {
        self.decks.read().await.get(&id).cloned()
    }
}
