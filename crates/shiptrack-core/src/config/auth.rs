//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
///
/// There is deliberately no default signing key: running with a known
/// default would let anyone forge tokens. [`AuthConfig::validate`] is
/// called during startup and refuses an empty key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default)]
    pub signing_key: String,
    /// Session token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Validate startup invariants. A missing signing key is fatal.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.signing_key.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.signing_key is not set; refusing to start without a signing key",
            ));
        }
        Ok(())
    }
}

fn default_token_ttl() -> u64 {
    168 // 7 days for interactive logins
}

fn default_password_min() -> usize {
    8
}
