// ============================================================================
// Recall Server
// ============================================================================
//
// Backend service that issues device-scoped access tokens, generates study
// flashcard decks via pluggable AI providers, and searches a third-party
// music catalog with a cached service-account credential.
//
// Every response goes through one envelope; every failure goes through one
// translator (see error.rs). The cache fails open; the token broker is
// cache-aside with an expiry safety margin.
//
// ============================================================================

pub mod auth;
pub mod cache;
pub mod catalog;
pub mod context;
pub mod envelope;
pub mod error;
pub mod flashcards;
pub mod routes;
pub mod validate;

pub use context::AppContext;
pub use envelope::Envelope;
pub use error::{AppError, AppResult, BusinessError};
