//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account in the Shiptrack system.
///
/// The email is the identity key: unique, immutable once created, and the
/// join key into the credential store. The role is stored as a plain
/// string and validated against [`super::Role`] when it is used.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique login identity (email-shaped).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Argon2 password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Stored role string ("admin", "client", "driver").
    pub role: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new account.
///
/// Carries only the pre-hashed password: the plaintext secret must never
/// reach the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Login identity.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role string.
    pub role: String,
}
