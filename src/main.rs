// ============================================================================
// Recall Server - entry point
// ============================================================================

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recall_config::Config;
use recall_server::cache::{Cache, MemoryCache, RedisCache};
use recall_server::context::AppContext;
use recall_server::routes::create_router;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Arc::new(Config::from_env()?);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("=== Recall Server Starting ===");
    info!("Port: {}", config.port);

    // Select the cache backend; the cache is an optimization, so running
    // without Redis is supported
    let cache: Arc<dyn Cache> = match &config.cache.redis_url {
        Some(url) => {
            info!("Connecting to Redis...");
            let client = recall_redis::RedisClient::connect(url)
                .await
                .context("Failed to connect to Redis")?;
            info!("Connected to Redis");
            Arc::new(RedisCache::new(client))
        }
        None => {
            info!("REDIS_URL not set, using in-process cache");
            Arc::new(MemoryCache::new())
        }
    };

    // Create application context and router
    let context = Arc::new(AppContext::new(config.clone(), cache)?);
    let app = create_router(context);

    // Start server
    info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
