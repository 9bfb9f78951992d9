//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shiptrack_entity::{Account, Role};

/// Account projection returned by the API. Never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            role: account.role,
            created_at: account.created_at,
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token for the `Authorization: Bearer` header.
    pub token: String,
    /// Confirmed role.
    pub role: Role,
    /// Absolute token expiry.
    pub expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub user: UserResponse,
}

/// Identity snapshot for the current session, derived from verified
/// token claims without a store round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Simple acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
