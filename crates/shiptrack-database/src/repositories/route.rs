//! Delivery route repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use shiptrack_core::error::{AppError, ErrorKind};
use shiptrack_core::result::AppResult;
use shiptrack_entity::DeliveryRoute;

use crate::store::RouteStore;

/// PostgreSQL-backed route store.
#[derive(Debug, Clone)]
pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    /// Create a new route repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteStore for RouteRepository {
    async fn list_all(&self) -> AppResult<Vec<DeliveryRoute>> {
        sqlx::query_as::<_, DeliveryRoute>("SELECT * FROM routes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list routes", e))
    }

    async fn assign_driver(
        &self,
        id: Uuid,
        driver_email: &str,
    ) -> AppResult<Option<DeliveryRoute>> {
        sqlx::query_as::<_, DeliveryRoute>(
            "UPDATE routes SET driver_email = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(driver_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign driver", e))
    }
}
