// ============================================================================
// Music Catalog Configuration
// ============================================================================
//
// Credentials and endpoints for the third-party music catalog. The service
// account token obtained from token_url is cached with a safety margin so a
// cached hit is always still valid when consumed.
//
// ============================================================================

const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SEARCH_URL: &str = "https://api.spotify.com/v1/search";
const DEFAULT_SEARCH_LIMIT: u32 = 5;
const DEFAULT_TOKEN_SAFETY_MARGIN_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub search_url: String,
    pub search_limit: u32,

    /// Seconds subtracted from the upstream credential lifetime before the
    /// token is cached, preventing a cached credential from expiring mid-use
    pub token_safety_margin_secs: u64,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("CATALOG_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("CATALOG_CLIENT_SECRET").unwrap_or_default(),

            token_url: std::env::var("CATALOG_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),

            search_url: std::env::var("CATALOG_SEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string()),

            search_limit: std::env::var("CATALOG_SEARCH_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(DEFAULT_SEARCH_LIMIT),

            token_safety_margin_secs: std::env::var("CATALOG_TOKEN_SAFETY_MARGIN_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_SAFETY_MARGIN_SECS),
        }
    }
}
