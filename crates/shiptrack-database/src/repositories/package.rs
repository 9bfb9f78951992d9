//! Package repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shiptrack_core::error::{AppError, ErrorKind};
use shiptrack_core::result::AppResult;
use shiptrack_entity::{NewPackage, Package, PackageStatus};

use crate::store::{PackageStore, tracking_code};

/// PostgreSQL-backed package store.
#[derive(Debug, Clone)]
pub struct PackageRepository {
    pool: PgPool,
}

impl PackageRepository {
    /// Create a new package repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageStore for PackageRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find package by id", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Package>> {
        sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list packages", e))
    }

    async fn list_by_sender(&self, email: &str) -> AppResult<Vec<Package>> {
        sqlx::query_as::<_, Package>(
            "SELECT * FROM packages WHERE LOWER(sender_email) = LOWER($1) ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list packages by sender", e)
        })
    }

    async fn list_by_driver(&self, email: &str) -> AppResult<Vec<Package>> {
        sqlx::query_as::<_, Package>(
            r#"SELECT p.* FROM packages p
               JOIN routes r ON p.assigned_route = r.id
               WHERE LOWER(r.driver_email) = LOWER($1)
               ORDER BY p.created_at DESC"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list packages by driver", e)
        })
    }

    async fn insert(&self, package: NewPackage) -> AppResult<Package> {
        sqlx::query_as::<_, Package>(
            r#"INSERT INTO packages (tracking_code, sender_email, recipient, destination)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(tracking_code())
        .bind(&package.sender_email)
        .bind(&package.recipient)
        .bind(&package.destination)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert package", e))
    }

    async fn update_status(&self, id: Uuid, status: PackageStatus) -> AppResult<Option<Package>> {
        sqlx::query_as::<_, Package>(
            r#"UPDATE packages SET status = $2, updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update package status", e)
        })
    }
}
