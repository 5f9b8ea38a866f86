// ============================================================================
// Application Context
// ============================================================================

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use recall_config::Config;

use crate::auth::AuthManager;
use crate::cache::Cache;
use crate::catalog::{CatalogSearchClient, CatalogTokenBroker};
use crate::flashcards::{DeckRepository, InMemoryDeckStore};

/// Application context containing shared dependencies
/// This reduces parameter passing and makes it easier to add new dependencies
pub struct AppContext {
    pub config: Arc<Config>,
    pub auth_manager: Arc<AuthManager>,
    pub cache: Arc<dyn Cache>,
    pub http: reqwest::Client,
    pub token_broker: Arc<CatalogTokenBroker>,
    pub catalog: Arc<CatalogSearchClient>,
    pub deck_store: Arc<dyn DeckRepository>,
}

impl AppContext {
    /// Creates a new application context around a chosen cache backend
    pub fn new(config: Arc<Config>, cache: Arc<dyn Cache>) -> Result<Self> {
        let auth_manager = Arc::new(AuthManager::new(&config)?);

        // One pooled client with a bounded timeout for every upstream call
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .context("Failed to create HTTP client")?;

        let token_broker = Arc::new(CatalogTokenBroker::new(
            http.clone(),
            cache.clone(),
            config.catalog.clone(),
        ));
        let catalog = Arc::new(CatalogSearchClient::new(
            http.clone(),
            config.catalog.clone(),
        ));

        Ok(Self {
            config,
            auth_manager,
            cache,
            http,
            token_broker,
            catalog,
            deck_store: Arc::new(InMemoryDeckStore::new()),
        })
    }
}
