// ============================================================================
// Axum Extractors
// ============================================================================
//
// Custom extractors for Axum routes:
// - AuthenticatedDevice: admission control from the Authorization header
// - ValidatedJson / ValidatedQuery: deserialization plus declarative
//   validation, with rejections translated to BusinessError so every
//   outcome leaves through the envelope
//
// ============================================================================

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use garde::Validate;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::auth::DeviceIdentity;
use crate::context::AppContext;
use crate::error::{AppError, BusinessError};
use crate::validate::validate_or_business_error;

/// Extractor for the authenticated device identity
///
/// Usage:
/// ```ignore
/// async fn handler(device: AuthenticatedDevice, ...) -> AppResult<...> {
///     let device_id = device.0.device_id;
///     // ...
/// }
/// ```
///
/// All rejection branches answer 401; the message text is the only
/// difference the caller can observe.
#[derive(Debug, Clone)]
pub struct AuthenticatedDevice(pub DeviceIdentity);

#[async_trait]
impl FromRequestParts<Arc<AppContext>> for AuthenticatedDevice {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        // Absent header, non-string header, and prefix mismatch all land here
        let token = match auth_header.and_then(|header| header.strip_prefix("Bearer ")) {
            Some(token) => token.trim(),
            None => {
                tracing::warn!("Device authentication failed: no usable Authorization header");
                return Err(BusinessError::unauthorized(
                    "Missing or invalid Authorization header",
                )
                .into());
            }
        };

        let identity = match state.auth_manager.verify_token(token) {
            Some(identity) => identity,
            None => {
                tracing::warn!("Device authentication failed: token rejected");
                return Err(BusinessError::unauthorized("Invalid or expired token").into());
            }
        };

        // Defends against token schema drift; the codec already rejects this
        if identity.device_id.trim().is_empty() {
            tracing::warn!("Device authentication failed: empty device id in payload");
            return Err(
                BusinessError::unauthorized("Invalid token payload: missing deviceId").into(),
            );
        }

        Ok(AuthenticatedDevice(identity))
    }
}

/// JSON body extractor that validates the payload and reports malformed
/// bodies as business errors
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| BusinessError::bad_request("body", rejection.body_text()))?;

        validate_or_business_error(&value)?;
        Ok(Self(value))
    }
}

/// Query string extractor with the same validation and translation rules
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| BusinessError::bad_request("query", rejection.body_text()))?;

        validate_or_business_error(&value)?;
        Ok(Self(value))
    }
}
