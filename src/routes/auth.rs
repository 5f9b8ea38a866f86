// ============================================================================
// Auth Routes
// ============================================================================
//
// POST /api/v1/auth/token - issue a device access token
//
// ============================================================================

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::auth::DeviceIdentity;
use crate::context::AppContext;
use crate::envelope::Envelope;
use crate::error::AppResult;
use crate::routes::extractors::ValidatedJson;
use crate::validate::is_uuid_v4;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueTokenRequest {
    #[garde(custom(is_uuid_v4))]
    pub device_id: String,
}

/// POST /api/v1/auth/token
pub async fn issue_token(
    State(ctx): State<Arc<AppContext>>,
    ValidatedJson(request): ValidatedJson<IssueTokenRequest>,
) -> AppResult<impl IntoResponse> {
    let identity = DeviceIdentity {
        device_id: request.device_id,
    };
    let token = ctx.auth_manager.issue_token(&identity)?;

    tracing::debug!(device_id = %identity.device_id, "Issued device access token");

    Ok((
        StatusCode::OK,
        Json(Envelope::success(json!({ "token": token }))),
    ))
}
