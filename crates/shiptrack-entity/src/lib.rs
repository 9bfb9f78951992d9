//! # shiptrack-entity
//!
//! Domain entity models for Shiptrack: accounts and roles, packages,
//! and delivery routes.

pub mod account;
pub mod package;
pub mod route;

pub use account::{Account, NewAccount, Role};
pub use package::{NewPackage, Package, PackageStatus};
pub use route::DeliveryRoute;
