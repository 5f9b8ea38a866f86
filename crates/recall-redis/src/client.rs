//! Redis client implementation with connection management

use crate::Result;
use redis::{aio::ConnectionManager, AsyncCommands};

/// Redis client with automatic reconnection
#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
}

impl RedisClient {
    /// Connect to Redis server
    ///
    /// Supports both redis:// and rediss:// (TLS) URLs
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    /// GET - Get value by key
    pub async fn get(&mut self, key: &str) -> Result<Option<String>> {
        self.conn.get(key).await
    }

    /// SETEX - Set key with expiry in seconds
    pub async fn set_ex(&mut self, key: &str, value: &str, seconds: u64) -> Result<()> {
        self.conn.set_ex(key, value, seconds).await
    }

    /// DEL - Delete a key
    pub async fn del(&mut self, key: &str) -> Result<i64> {
        self.conn.del(key).await
    }

    /// EXISTS - Check if key exists
    pub async fn exists(&mut self, key: &str) -> Result<bool> {
        self.conn.exists(key).await
    }

    /// TTL - Get time to live in seconds
    pub async fn ttl(&mut self, key: &str) -> Result<i64> {
        self.conn.ttl(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests require a running Redis instance
    // Run with: docker run -d -p 6379:6379 redis:7

    #[tokio::test]
    #[ignore] // Requires Redis
    async fn test_set_ex_get_del() -> Result<()> {
        let mut client = RedisClient::connect("redis://localhost:6379").await?;

        client.set_ex("recall_test_key", "test_value", 10).await?;
        let value = client.get("recall_test_key").await?;
        assert_eq!(value, Some("test_value".to_string()));

        client.del("recall_test_key").await?;
        let value = client.get("recall_test_key").await?;
        assert_eq!(value, None);

        Ok(())
    }

    #[tokio::test]
    #[ignore] // Requires Redis
    async fn test_expiry() -> Result<()> {
        let mut client = RedisClient::connect("redis://localhost:6379").await?;

        client.set_ex("recall_expire_test", "value", 10).await?;
        let ttl = client.ttl("recall_expire_test").await?;
        assert!(ttl > 0 && ttl <= 10);

        client.del("recall_expire_test").await?;

        Ok(())
    }
}
