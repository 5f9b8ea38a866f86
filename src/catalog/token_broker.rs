// ============================================================================
// Catalog Token Broker
// ============================================================================
//
// Cache-aside acquisition of the catalog service credential:
//
// 1. Cache hit under the fixed key -> return immediately. No upstream call,
//    no client-side expiry check: the cached TTL already carries the safety
//    margin, so a hit is always still valid when consumed.
// 2. Miss -> client-credentials POST to the upstream token endpoint.
// 3. Cache with TTL = expires_in - safety margin (clamped to >= 0), return.
//
// A single-flight lock serializes the miss path: waiters re-check the cache
// after acquiring the lock, so concurrent misses collapse to one upstream
// call. The guard drops on every exit path, including upstream failure.
//
// Upstream failures propagate unmodified; the dependent feature cannot
// proceed without a credential.
//
// ============================================================================

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use recall_config::CatalogConfig;

use crate::cache::Cache;
use crate::error::AppResult;

/// Fixed cache slot for the service credential
pub const ACCESS_TOKEN_CACHE_KEY: &str = "catalog:access_token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
    expires_in: u64,
}

pub struct CatalogTokenBroker {
    http: reqwest::Client,
    cache: Arc<dyn Cache>,
    config: CatalogConfig,
    refresh_lock: Mutex<()>,
}

impl CatalogTokenBroker {
    pub fn new(http: reqwest::Client, cache: Arc<dyn Cache>, config: CatalogConfig) -> Self {
        Self {
            http,
            cache,
            config,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Get a valid catalog access token, refreshing through the upstream
    /// credential endpoint on a cache miss
    pub async fn get_access_token(&self) -> AppResult<String> {
        if let Some(token) = self.cache.get(ACCESS_TOKEN_CACHE_KEY).await {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        // A concurrent caller may have refreshed while we waited for the lock
        if let Some(token) = self.cache.get(ACCESS_TOKEN_CACHE_KEY).await {
            return Ok(token);
        }

        let token = self.fetch_token().await?;
        Ok(token)
    }

    async fn fetch_token(&self) -> AppResult<String> {
        let credentials = BASE64.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        tracing::debug!(url = %self.config.token_url, "Refreshing catalog access token");

        let response: TokenResponse = self
            .http
            .post(&self.config.token_url)
            .header(AUTHORIZATION, format!("Basic {}", credentials))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let ttl = response
            .expires_in
            .saturating_sub(self.config.token_safety_margin_secs);
        self.cache
            .set(ACCESS_TOKEN_CACHE_KEY, &response.access_token, ttl)
            .await;

        tracing::debug!(ttl_secs = ttl, "Catalog access token cached");

        Ok(response.access_token)
    }
}
