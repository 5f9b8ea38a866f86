// ============================================================================
// Catalog Token Broker Tests
// ============================================================================
//
// Cache-aside behavior against a fake credential endpoint: hits skip the
// upstream, misses refresh exactly once even under concurrency, the safety
// margin clamps short lifetimes, and upstream failures release the
// single-flight lock.
//
// ============================================================================

use futures_util::future::join_all;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use recall_config::CatalogConfig;
use recall_server::cache::{Cache, MemoryCache};
use recall_server::catalog::{CatalogTokenBroker, ACCESS_TOKEN_CACHE_KEY};

mod test_utils;
use test_utils::spawn_fake_catalog;

fn broker_for(
    token_url: String,
    cache: Arc<dyn Cache>,
    safety_margin_secs: u64,
) -> CatalogTokenBroker {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    CatalogTokenBroker::new(
        http,
        cache,
        CatalogConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-client-secret".to_string(),
            token_url,
            search_url: String::new(),
            search_limit: 5,
            token_safety_margin_secs: safety_margin_secs,
        },
    )
}

#[tokio::test]
async fn test_cached_token_skips_upstream() {
    let catalog = spawn_fake_catalog(3600, 0).await;
    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    cache.set(ACCESS_TOKEN_CACHE_KEY, "already-cached", 3600).await;

    let broker = broker_for(catalog.token_url(), cache, 60);
    let token = broker.get_access_token().await.unwrap();

    assert_eq!(token, "already-cached");
    assert_eq!(catalog.token_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_miss_refreshes_once_then_serves_from_cache() {
    let catalog = spawn_fake_catalog(3600, 0).await;
    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let broker = broker_for(catalog.token_url(), cache.clone(), 60);

    let first = broker.get_access_token().await.unwrap();
    assert_eq!(first, "token-1");
    assert_eq!(catalog.token_calls.load(Ordering::SeqCst), 1);

    // Within the safety-margined TTL the second call is a pure cache hit
    let second = broker.get_access_token().await.unwrap();
    assert_eq!(second, first);
    assert_eq!(catalog.token_calls.load(Ordering::SeqCst), 1);

    // The credential was cached under the fixed key
    assert_eq!(
        cache.get(ACCESS_TOKEN_CACHE_KEY).await,
        Some("token-1".to_string())
    );
}

#[tokio::test]
async fn test_concurrent_misses_collapse_to_one_refresh() {
    let catalog = spawn_fake_catalog(3600, 0).await;
    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let broker = Arc::new(broker_for(catalog.token_url(), cache, 60));

    let callers = (0..8).map(|_| {
        let broker = broker.clone();
        async move { broker.get_access_token().await.unwrap() }
    });
    let tokens = join_all(callers).await;

    assert_eq!(catalog.token_calls.load(Ordering::SeqCst), 1);
    assert!(tokens.iter().all(|token| token == "token-1"));
}

#[tokio::test]
async fn test_short_lifetime_clamps_ttl_and_refetches() {
    // expires_in below the safety margin clamps the cached TTL to zero, so
    // the entry is never served and every call refreshes
    let catalog = spawn_fake_catalog(30, 0).await;
    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let broker = broker_for(catalog.token_url(), cache, 60);

    let first = broker.get_access_token().await.unwrap();
    let second = broker.get_access_token().await.unwrap();

    assert_eq!(first, "token-1");
    assert_eq!(second, "token-2");
    assert_eq!(catalog.token_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_upstream_failure_propagates_and_releases_lock() {
    let catalog = spawn_fake_catalog(3600, 1).await;
    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let broker = broker_for(catalog.token_url(), cache, 60);

    // First call hits the failing upstream and surfaces the error
    assert!(broker.get_access_token().await.is_err());

    // The single-flight lock was released; the retry succeeds
    let token = broker.get_access_token().await.unwrap();
    assert_eq!(token, "token-2");
    assert_eq!(catalog.token_calls.load(Ordering::SeqCst), 2);
}
