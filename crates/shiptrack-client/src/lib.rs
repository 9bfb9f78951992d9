//! # shiptrack-client
//!
//! Client-side session handling for Shiptrack frontends.
//!
//! Holds the logged-in session in memory, mirrors it to durable storage
//! so it survives restarts, and exposes a pure route-guard decision
//! function. Everything here is advisory: the server re-verifies the
//! token on every request, so a tampered local session can change what
//! the client renders but never what the API permits.

pub mod guard;
pub mod session;

pub use guard::{GuardDecision, guard};
pub use session::{ClientSession, SessionStore};
