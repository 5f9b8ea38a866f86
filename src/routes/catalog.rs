// ============================================================================
// Catalog Routes
// ============================================================================
//
// GET /api/v1/catalog/search - authenticated track search by artist
//
// ============================================================================

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use serde::Deserialize;
use std::sync::Arc;

use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppResult;
use crate::routes::extractors::{AuthenticatedDevice, ValidatedQuery};

#[derive(Debug, Deserialize, Validate)]
pub struct SearchSongsRequest {
    #[garde(length(min = 1))]
    pub artist: String,
}

/// GET /api/v1/catalog/search?artist=...
pub async fn search_songs(
    State(ctx): State<Arc<AppContext>>,
    ValidatedQuery(request): ValidatedQuery<SearchSongsRequest>,
    device: AuthenticatedDevice,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(
        device_id = %device.0.device_id,
        artist = %request.artist,
        "Searching catalog"
    );

    let access_token = ctx.token_broker.get_access_token().await?;
    let songs = ctx
        .catalog
        .search_by_artist(&request.artist, &access_token)
        .await?;

    Ok((StatusCode::OK, Json(Envelope::success(&songs))))
}
