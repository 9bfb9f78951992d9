//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use shiptrack_core::error::{AppError, ErrorKind};
use shiptrack_core::result::AppResult;
use shiptrack_entity::{Account, NewAccount};

use crate::store::CredentialStore;

/// PostgreSQL-backed credential store.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for AccountRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    async fn insert(&self, account: NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            r#"INSERT INTO accounts (email, name, address, password_hash, role)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(&account.email)
        .bind(&account.name)
        .bind(&account.address)
        .bind(&account.password_hash)
        .bind(&account.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("An account with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert account", e),
        })
    }
}
