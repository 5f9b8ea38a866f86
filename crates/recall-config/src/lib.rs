// ============================================================================
// Recall Config - Centralized configuration management
// ============================================================================
//
// This crate provides centralized configuration for the recall server.
// Supports loading from environment variables with sensible defaults.
//
// ============================================================================

mod ai;
mod cache;
mod catalog;

pub use ai::AiConfig;
pub use cache::CacheConfig;
pub use catalog::CatalogConfig;

use anyhow::Result;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DEVICE_TOKEN_TTL_DAYS: i64 = 7;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the recall server
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub rust_log: String,

    /// Symmetric secret for device-token signing (HS256)
    pub jwt_secret: String,
    pub jwt_issuer: String,

    /// Device access token TTL in days
    pub device_token_ttl_days: i64,

    /// Timeout for all outbound HTTP calls in seconds
    pub http_timeout_secs: u64,

    // Sub-configurations
    pub cache: CacheConfig,
    pub catalog: CatalogConfig,
    pub ai: AiConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must be set to a non-empty value");
        }

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| format!("0.0.0.0:{}", port)),

            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),

            jwt_secret,

            jwt_issuer: std::env::var("JWT_ISSUER")
                .unwrap_or_else(|_| "recall-server".to_string()),

            device_token_ttl_days: std::env::var("DEVICE_TOKEN_TTL_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(DEFAULT_DEVICE_TOKEN_TTL_DAYS),

            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),

            cache: CacheConfig::from_env(),
            catalog: CatalogConfig::from_env(),
            ai: AiConfig::from_env(),
        })
    }
}
