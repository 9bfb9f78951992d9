//! # shiptrack-database
//!
//! Persistence layer for Shiptrack: the store traits consumed by the
//! auth service and HTTP handlers, the PostgreSQL implementations, and
//! in-memory implementations used by tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use store::{CredentialStore, PackageStore, RouteStore};
