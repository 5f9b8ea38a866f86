//! # Recall Redis
//!
//! Low-level Redis client for the recall server.
//!
//! ## Design Principles
//!
//! - **No business logic** - Pure infrastructure layer
//! - **No dependencies** on other recall-* crates
//! - **String-oriented key-value surface** - Everything the server caches is
//!   an opaque string with a TTL
//!
//! ## Example
//!
//! ```rust,no_run
//! use recall_redis::RedisClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = RedisClient::connect("redis://localhost:6379").await?;
//!
//!     // Set with expiry
//!     client.set_ex("key", "value", 3600).await?;
//!
//!     // Get
//!     let value: Option<String> = client.get("key").await?;
//!
//!     Ok(())
//! }
//! ```

mod client;

pub use client::RedisClient;

// Re-export commonly used types
pub use redis::RedisError;

/// Result type for Redis operations
pub type Result<T> = std::result::Result<T, RedisError>;
