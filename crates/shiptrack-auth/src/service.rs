//! Authentication service — credential verification and token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use shiptrack_core::config::AuthConfig;
use shiptrack_core::error::AppError;
use shiptrack_core::result::AppResult;
use shiptrack_database::store::CredentialStore;
use shiptrack_entity::{Account, NewAccount, Role};

use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;

/// Result of a successful authentication.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// Signed session token.
    pub token: String,
    /// Confirmed role.
    pub role: Role,
    /// Absolute token expiry.
    pub expires_at: chrono::DateTime<chrono::Utc>,
    /// The authenticated account.
    pub account: Account,
}

/// Data submitted at registration.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Login identity.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Plaintext secret; hashed before it ever reaches the store.
    pub password: String,
    /// Requested role.
    pub role: Role,
}

/// Orchestrates the credential store, password hasher, and token codec.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    codec: Arc<TokenCodec>,
    password_min_length: usize,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        codec: Arc<TokenCodec>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            store,
            hasher,
            codec,
            password_min_length: config.password_min_length,
        }
    }

    /// Validates an identity/secret/claimed-role combination and issues
    /// a session token.
    ///
    /// The caller asserts which role it expects to log in as; the stored
    /// role must agree. This closes the class of bug where a client
    /// silently assumes the wrong privilege level after a role change.
    /// Each rejection path is logged with its precise cause; the HTTP
    /// mapping coalesces the client-facing message.
    pub async fn authenticate(
        &self,
        email: &str,
        secret: &str,
        claimed_role: Role,
    ) -> Result<Authenticated, AuthError> {
        let account = self
            .store
            .find_by_email(email)
            .await
            .map_err(AuthError::StoreUnavailable)?
            .ok_or_else(|| {
                warn!(identity = %email, "Login rejected: unknown identity");
                AuthError::UnknownIdentity
            })?;

        if !self.hasher.verify(secret, &account.password_hash) {
            warn!(identity = %email, "Login rejected: secret verification failed");
            return Err(AuthError::BadSecret);
        }

        let role: Role = account.role.parse().map_err(|_| {
            warn!(
                identity = %email,
                stored_role = %account.role,
                "Login rejected: stored role is outside the role enumeration"
            );
            AuthError::InvalidRole
        })?;

        if role != claimed_role {
            warn!(
                identity = %email,
                claimed = %claimed_role,
                "Login rejected: claimed role does not match stored role"
            );
            return Err(AuthError::RoleMismatch);
        }

        let issued = self.codec.issue(&account.email, &account.name, role)?;
        info!(identity = %email, role = %role, "Login successful");

        Ok(Authenticated {
            token: issued.token,
            role,
            expires_at: issued.expires_at,
            account,
        })
    }

    /// Registers a new account.
    ///
    /// The plaintext secret is hashed here; the store only ever sees the
    /// hash. Duplicate identities surface as a store-layer conflict.
    pub async fn register(&self, registration: Registration) -> AppResult<Account> {
        let Registration {
            email,
            name,
            address,
            password,
            role,
        } = registration;

        if email.trim().is_empty()
            || name.trim().is_empty()
            || address.trim().is_empty()
            || password.is_empty()
        {
            return Err(AuthError::MissingFields.into());
        }

        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let password_hash = self.hasher.hash(&password)?;

        let account = self
            .store
            .insert(NewAccount {
                email,
                name,
                address,
                password_hash,
                role: role.as_str().to_string(),
            })
            .await?;

        info!(identity = %account.email, role = %role, "Account registered");
        Ok(account)
    }
}
