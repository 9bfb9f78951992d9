//! # shiptrack-api
//!
//! HTTP API layer for Shiptrack built on Axum.
//!
//! Provides the REST endpoints, the token-validating middleware, the
//! claims extractor, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
