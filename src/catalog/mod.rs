// ============================================================================
// Music Catalog
// ============================================================================
//
// Integration with the third-party music catalog:
// - token_broker: cache-aside acquisition of the service-account credential
// - search: track search with the brokered bearer token
//
// ============================================================================

mod search;
mod token_broker;

pub use search::{CatalogSearchClient, Song};
pub use token_broker::{CatalogTokenBroker, ACCESS_TOKEN_CACHE_KEY};
