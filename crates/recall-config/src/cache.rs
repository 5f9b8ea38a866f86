// ============================================================================
// Cache Configuration
// ============================================================================

/// Configuration for the key-value cache backend
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Redis connection URL. When unset the server falls back to an
    /// in-process cache, so a missing backend degrades performance only.
    pub redis_url: Option<String>,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            redis_url: std::env::var("REDIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}
