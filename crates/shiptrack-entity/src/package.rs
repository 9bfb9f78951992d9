//! Package entity model and status enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Delivery status of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "package_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    /// Accepted into the system, not yet picked up.
    Registered,
    /// On a route, between origin and destination.
    InTransit,
    /// Delivered to the recipient.
    Delivered,
    /// Returned to the sender.
    Returned,
}

impl PackageStatus {
    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Returned => "returned",
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageStatus {
    type Err = shiptrack_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(Self::Registered),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "returned" => Ok(Self::Returned),
            _ => Err(shiptrack_core::AppError::validation(format!(
                "Invalid package status: '{s}'"
            ))),
        }
    }
}

/// A tracked package.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    /// Unique package identifier.
    pub id: Uuid,
    /// Human-facing tracking code.
    pub tracking_code: String,
    /// Identity of the sending client.
    pub sender_email: String,
    /// Recipient name.
    pub recipient: String,
    /// Destination address.
    pub destination: String,
    /// Current delivery status.
    pub status: PackageStatus,
    /// Route this package is assigned to, if any.
    pub assigned_route: Option<Uuid>,
    /// When the package was registered.
    pub created_at: DateTime<Utc>,
    /// Last status change.
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a new package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackage {
    /// Identity of the sending client.
    pub sender_email: String,
    /// Recipient name.
    pub recipient: String,
    /// Destination address.
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            PackageStatus::Registered,
            PackageStatus::InTransit,
            PackageStatus::Delivered,
            PackageStatus::Returned,
        ] {
            assert_eq!(status.as_str().parse::<PackageStatus>().unwrap(), status);
        }
        assert!("lost".parse::<PackageStatus>().is_err());
    }
}
