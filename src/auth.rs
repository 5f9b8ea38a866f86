// ============================================================================
// Device Token Codec
// ============================================================================
//
// Issues and verifies the signed device-access tokens that identify an
// installed client instance. Tokens are HS256 JWTs carrying the device id,
// a token type discriminator, and standard expiry/issuer claims.
//
// Verification collapses every failure cause (bad signature, expired,
// malformed, wrong type, missing device id) into a single `None` so callers
// cannot probe token structure through differing rejections.
//
// ============================================================================

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use recall_config::Config;

/// The only token type accepted for request authentication
pub const TOKEN_TYPE_DEVICE_ACCESS: &str = "device_access";

/// Caller-supplied identity carried inside a signed token, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub device_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // device_id
    pub token_type: String, // must be "device_access"
    pub exp: i64,           // Expiration time
    pub iat: i64,           // Issued at
    pub iss: String,        // Issuer
}

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_days: i64,
    issuer: String,
}

impl AuthManager {
    pub fn new(config: &Config) -> Result<Self> {
        if config.jwt_secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must be set to a non-empty value");
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_days: config.device_token_ttl_days,
            issuer: config.jwt_issuer.clone(),
        })
    }

    /// Create a device access token for the given identity
    pub fn issue_token(&self, identity: &DeviceIdentity) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::days(self.token_ttl_days);

        let claims = Claims {
            sub: identity.device_id.clone(),
            token_type: TOKEN_TYPE_DEVICE_ACCESS.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Failed to encode device token")
    }

    /// Verify a device access token
    ///
    /// Returns the embedded identity, or `None` for any failure: signature,
    /// expiry, issuer, structure, wrong token type, or missing device id.
    /// Callers must not be able to distinguish the cause.
    pub fn verify_token(&self, token: &str) -> Option<DeviceIdentity> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.clone()]);

        let claims = match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!(error = %e, "Device token verification failed");
                return None;
            }
        };

        if claims.token_type != TOKEN_TYPE_DEVICE_ACCESS || claims.sub.trim().is_empty() {
            tracing::debug!("Device token rejected: wrong type or missing device id");
            return None;
        }

        Some(DeviceIdentity {
            device_id: claims.sub,
        })
    }
}
