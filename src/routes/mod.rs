// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware
// - health.rs: Health check endpoint
// - auth.rs: Device token issuance
// - flashcards.rs: Deck generation and retrieval
// - catalog.rs: Authenticated catalog search
// - extractors.rs: Custom Axum extractors (auth guard, validated inputs)
// - middleware.rs: Request logging
//
// ============================================================================

mod auth;
mod catalog;
mod extractors;
mod flashcards;
mod health;
mod middleware;

pub use extractors::{AuthenticatedDevice, ValidatedJson, ValidatedQuery};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // Health (no auth)
        .route("/health", get(health::health_check))
        // Device token issuance
        .route("/api/v1/auth/token", post(auth::issue_token))
        // Legacy unversioned alias (for backward compatibility)
        .route("/auth/token", post(auth::issue_token))
        // Flashcards
        .route("/api/v1/flashcards/generate", post(flashcards::generate_deck))
        .route("/api/v1/flashcards/:id", get(flashcards::get_deck))
        // Catalog (auth guarded)
        .route("/api/v1/catalog/search", get(catalog::search_songs))
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .into_inner(),
        )
        .with_state(app_context)
}
