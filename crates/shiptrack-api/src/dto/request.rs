//! Request DTOs with validation rules.

use serde::Deserialize;
use validator::Validate;

/// Login request body.
///
/// `role` carries the role the client believes it holds; the
/// authentication service checks it against the stored role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login identity.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext secret.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Claimed role ("admin", "client", or "driver").
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Requested role ("admin", "client", or "driver").
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Package creation request body. The sender is taken from the session
/// claims, never from the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePackageRequest {
    #[validate(length(min = 1, max = 100, message = "Recipient must be 1-100 characters"))]
    pub recipient: String,
    #[validate(length(min = 1, max = 200, message = "Destination must be 1-200 characters"))]
    pub destination: String,
}

/// Package status update request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    /// Target status ("registered", "in_transit", "delivered", "returned").
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Driver assignment request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignDriverRequest {
    #[validate(email(message = "Invalid driver email address"))]
    pub driver_email: String,
}
