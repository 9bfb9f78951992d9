//! Authentication error taxonomy.
//!
//! Every rejection path stays distinguishable here for logging and
//! audit; the conversion into [`AppError`] deliberately coalesces the
//! four login-rejection kinds into one non-revealing client message so
//! responses cannot be used for identity enumeration.

use thiserror::Error;

use shiptrack_core::error::{AppError, ErrorKind};

use crate::token::TokenError;

/// Errors produced by the authentication subsystem.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required registration or login field was absent or empty.
    #[error("missing required fields")]
    MissingFields,
    /// No account exists for the presented identity.
    #[error("unknown identity")]
    UnknownIdentity,
    /// The presented secret does not match the stored hash.
    #[error("secret verification failed")]
    BadSecret,
    /// The stored role is not a member of the closed role enumeration.
    #[error("stored role is not a recognized role")]
    InvalidRole,
    /// The caller's claimed role does not match the stored role.
    #[error("claimed role does not match stored role")]
    RoleMismatch,
    /// The token could not be decoded or its signature is invalid.
    #[error("token is malformed")]
    TokenMalformed,
    /// The token is structurally valid but past its expiry.
    #[error("token has expired")]
    TokenExpired,
    /// The credential store could not be reached.
    #[error("credential store unavailable")]
    StoreUnavailable(#[source] AppError),
    /// Token signing or hashing failed for an internal reason.
    #[error("internal authentication failure")]
    Internal(#[source] AppError),
    /// No signing key is configured. Startup-only and fatal.
    #[error("signing key is not configured")]
    SigningKeyMissing,
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::TokenExpired,
            TokenError::Malformed => Self::TokenMalformed,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields => AppError::validation("Missing required fields"),
            // One generic message for all credential rejections; the
            // precise cause is already logged server-side.
            AuthError::UnknownIdentity | AuthError::BadSecret => {
                AppError::unauthorized("Invalid credentials")
            }
            AuthError::InvalidRole | AuthError::RoleMismatch => {
                AppError::forbidden("Invalid credentials")
            }
            AuthError::TokenMalformed | AuthError::TokenExpired => {
                AppError::unauthorized("Invalid or expired token")
            }
            AuthError::StoreUnavailable(source) => {
                AppError::with_source(ErrorKind::Internal, "Internal server error", source)
            }
            AuthError::Internal(source) => {
                AppError::with_source(ErrorKind::Internal, "Internal server error", source)
            }
            AuthError::SigningKeyMissing => {
                AppError::configuration("Signing key is not configured")
            }
        }
    }
}
