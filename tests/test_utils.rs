// ============================================================================
// Shared test helpers
// ============================================================================
//
// spawn_app: serve the real router on an ephemeral port with an in-process
// cache, so tests run without Redis.
//
// spawn_fake_catalog: a local stand-in for the third-party catalog with a
// client-credentials token endpoint and a track search endpoint, counting
// upstream calls so tests can assert cache-aside behavior.
//
// ============================================================================

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use recall_config::{AiConfig, CacheConfig, CatalogConfig, Config};
use recall_server::cache::{Cache, MemoryCache};
use recall_server::context::AppContext;
use recall_server::routes::create_router;

/// Port 9 (discard) is unassigned on loopback; connections fail fast
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub struct TestApp {
    pub address: String,
}

/// Configuration with test defaults; upstream endpoints are unreachable
/// unless a test points them at a fake server
pub fn test_config() -> Config {
    Config {
        port: 0,
        bind_address: "127.0.0.1:0".to_string(),
        rust_log: "debug".to_string(),
        jwt_secret: "recall-test-secret-0123456789".to_string(),
        jwt_issuer: "recall-server".to_string(),
        device_token_ttl_days: 7,
        http_timeout_secs: 2,
        cache: CacheConfig { redis_url: None },
        catalog: CatalogConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-client-secret".to_string(),
            token_url: format!("{}/api/token", UNREACHABLE_URL),
            search_url: format!("{}/v1/search", UNREACHABLE_URL),
            search_limit: 5,
            token_safety_margin_secs: 60,
        },
        ai: AiConfig {
            openai_api_key: "test-openai-key".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_api_url: format!("{}/v1/chat/completions", UNREACHABLE_URL),
            gemini_api_key: "test-gemini-key".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_api_url: format!("{}/v1beta/models", UNREACHABLE_URL),
        },
    }
}

pub async fn spawn_app(config: Config) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());

    let cache: Arc<dyn Cache> = Arc::new(MemoryCache::new());
    let context = Arc::new(AppContext::new(Arc::new(config), cache).unwrap());
    let app = create_router(context);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp { address }
}

// ============================================================================
// Fake catalog upstream
// ============================================================================

pub struct FakeCatalog {
    pub base_url: String,
    pub token_calls: Arc<AtomicUsize>,
    pub search_calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.base_url)
    }

    pub fn search_url(&self) -> String {
        format!("{}/v1/search", self.base_url)
    }
}

#[derive(Clone)]
struct FakeCatalogState {
    token_calls: Arc<AtomicUsize>,
    search_calls: Arc<AtomicUsize>,
    expires_in: u64,
    failures_left: Arc<AtomicUsize>,
}

/// Spawn a local catalog stand-in. `expires_in` is the credential lifetime
/// the token endpoint reports; the first `fail_first` token requests answer
/// with HTTP 500.
pub async fn spawn_fake_catalog(expires_in: u64, fail_first: usize) -> FakeCatalog {
    let state = FakeCatalogState {
        token_calls: Arc::new(AtomicUsize::new(0)),
        search_calls: Arc::new(AtomicUsize::new(0)),
        expires_in,
        failures_left: Arc::new(AtomicUsize::new(fail_first)),
    };

    let token_calls = state.token_calls.clone();
    let search_calls = state.search_calls.clone();

    let app = Router::new()
        .route("/api/token", post(fake_token))
        .route("/v1/search", get(fake_search))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCatalog {
        base_url,
        token_calls,
        search_calls,
    }
}

async fn fake_token(State(state): State<FakeCatalogState>) -> impl IntoResponse {
    let call = state.token_calls.fetch_add(1, Ordering::SeqCst) + 1;

    let should_fail = state
        .failures_left
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
            left.checked_sub(1)
        })
        .is_ok();
    if should_fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "server_error"})));
    }

    (
        StatusCode::OK,
        Json(json!({
            "access_token": format!("token-{}", call),
            "token_type": "Bearer",
            "expires_in": state.expires_in,
        })),
    )
}

async fn fake_search(
    State(state): State<FakeCatalogState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    state.search_calls.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("Bearer token-"))
        .unwrap_or(false);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "invalid_token"})));
    }

    (
        StatusCode::OK,
        Json(json!({
            "tracks": {
                "items": [{
                    "id": "track-1",
                    "name": "Hey Jude",
                    "artists": [{"name": "The Beatles"}],
                    "album": {
                        "name": "Hey Jude",
                        "images": [{"url": "https://album-image.jpg"}]
                    },
                    "preview_url": "https://preview.mp3"
                }]
            }
        })),
    )
}

// ============================================================================
// Fake OpenAI upstream
// ============================================================================

pub struct FakeOpenAi {
    pub base_url: String,
    pub calls: Arc<AtomicUsize>,
}

impl FakeOpenAi {
    pub fn api_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// Spawn a local OpenAI stand-in whose completions contain `content`
pub async fn spawn_fake_openai(content: &str) -> FakeOpenAi {
    let calls = Arc::new(AtomicUsize::new(0));
    let content = content.to_string();

    let handler_calls = calls.clone();
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move || {
            let content = content.clone();
            let calls = handler_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": content}}]
                }))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeOpenAi { base_url, calls }
}
