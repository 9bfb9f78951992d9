//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of privilege levels in Shiptrack.
///
/// Stored roles are kept as plain strings in the database and parsed
/// through [`FromStr`] at authentication time, so a corrupted or
/// out-of-range stored value surfaces as an explicit error instead of
/// silently granting access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrator of the dashboard.
    Admin,
    /// Customer who sends and tracks packages.
    Client,
    /// Driver assigned to delivery routes.
    Driver,
}

impl Role {
    /// Check if this role is the administrator role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
            Self::Driver => "driver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = shiptrack_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "client" => Ok(Self::Client),
            "driver" => Ok(Self::Driver),
            _ => Err(shiptrack_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, client, driver"
            ))),
        }
    }
}
