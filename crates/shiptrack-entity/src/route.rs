//! Delivery route entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A delivery route between two hubs.
///
/// Distances come from the external routing service and are treated as
/// opaque inputs here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeliveryRoute {
    /// Unique route identifier.
    pub id: Uuid,
    /// Route display name.
    pub name: String,
    /// Origin hub.
    pub origin: String,
    /// Destination hub.
    pub destination: String,
    /// Route length in kilometers.
    pub distance_km: f64,
    /// Identity of the assigned driver, if any.
    pub driver_email: Option<String>,
    /// When the route was created.
    pub created_at: DateTime<Utc>,
}
