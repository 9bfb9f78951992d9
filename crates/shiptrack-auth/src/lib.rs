//! # shiptrack-auth
//!
//! Authentication subsystem: Argon2 password hashing, the signed
//! session-token codec, and the authentication service orchestrating
//! credential lookup, verification, and token issuance.

pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use service::{AuthService, Authenticated, Registration};
pub use token::{Claims, IssuedToken, TokenCodec, TokenError};
