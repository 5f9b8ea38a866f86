// ============================================================================
// Key-Value Cache
// ============================================================================
//
// The cache is an optimization, not a source of truth. Reads fail open:
// backend errors degrade to a miss, never to a request failure. Writes and
// deletes are best-effort; failures are logged and swallowed.
//
// Two backends:
// - RedisCache: production backend over recall-redis
// - MemoryCache: in-process TTL map for cacheless deployments and tests
//
// ============================================================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use recall_redis::RedisClient;

/// Generic string cache with per-entry TTL
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the value, or `None` when the key is absent, expired, or the
    /// backend errored
    async fn get(&self, key: &str) -> Option<String>;

    /// Best-effort write with expiry in seconds
    async fn set(&self, key: &str, value: &str, ttl_secs: u64);

    /// Best-effort delete
    async fn del(&self, key: &str);
}

/// Redis-backed cache
pub struct RedisCache {
    client: RedisClient,
}

impl RedisCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Option<String> {
        // ConnectionManager clones share the underlying connection
        match self.client.clone().get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Cache read failed, treating as miss");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) {
        if let Err(e) = self.client.clone().set_ex(key, value, ttl_secs).await {
            tracing::warn!(error = %e, key = %key, "Cache write failed, continuing without cache");
        }
    }

    async fn del(&self, key: &str) {
        if let Err(e) = self.client.clone().del(key).await {
            tracing::warn!(error = %e, key = %key, "Cache delete failed, continuing");
        }
    }
}

/// In-process cache with the same TTL semantics as the Redis backend
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some((value, deadline)) if *deadline > Instant::now() => Some(value.clone()),
            Some(_) => {
                // Expired entries must never be returned
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) {
        let deadline = Instant::now() + Duration::from_secs(ttl_secs);
        self.entries
            .lock()
            .await
            .insert(key.to_string(), (value.to_string(), deadline));
    }

    async fn del(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }
}
