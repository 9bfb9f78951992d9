//! Session token codec — signed, time-bounded claims.
//!
//! Tokens are self-contained: no server-side store of outstanding
//! tokens exists, so a token cannot be revoked before its expiry. That
//! is an accepted limitation of the single-token session design.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shiptrack_core::config::AuthConfig;
use shiptrack_core::error::AppError;

use shiptrack_entity::Role;

use crate::error::AuthError;

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account identity (email).
    pub sub: String,
    /// Display name at the time of issuance.
    pub name: String,
    /// Role at the time of issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Token verification failure.
///
/// `Expired` means the token was structurally valid and correctly
/// signed but past its expiry; everything else is `Malformed`. Access
/// control treats both the same, diagnostics do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not decodable, or the signature does not verify.
    #[error("malformed token")]
    Malformed,
    /// Structurally valid but past expiry.
    #[error("expired token")]
    Expired,
}

/// A freshly issued session token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed token string.
    pub token: String,
    /// Absolute expiry.
    pub expires_at: DateTime<Utc>,
}

/// Creates and validates signed session tokens.
///
/// Constructed once at startup from configuration and shared read-only
/// across requests; issuance and verification are pure functions of the
/// inputs plus the signing key.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_hours: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    ///
    /// Refuses to construct without a signing key: issuing unsigned or
    /// default-signed tokens is worse than not starting.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        if config.signing_key.trim().is_empty() {
            return Err(AuthError::SigningKeyMissing);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_key.as_bytes()),
            validation,
            ttl_hours: config.token_ttl_hours as i64,
        })
    }

    /// Issues a signed token for the given identity with the configured TTL.
    pub fn issue(&self, sub: &str, name: &str, role: Role) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: sub.to_string(),
            name: name.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Internal(AppError::internal(format!("Failed to sign token: {e}")))
        })?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verifies signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}
