//! Store traits — the seams between business logic and persistence.
//!
//! The auth service and the HTTP handlers only ever see these traits, so
//! the PostgreSQL implementations can be swapped for the in-memory ones
//! in tests without touching any request-handling code.

use async_trait::async_trait;
use uuid::Uuid;

use shiptrack_core::AppResult;
use shiptrack_entity::{Account, DeliveryRoute, NewAccount, NewPackage, Package, PackageStatus};

/// Credential store adapter: account lookup and insertion by identity key.
///
/// Owns no logic beyond lookup. Duplicate identities surface as a
/// conflict error from `insert`, never a silent overwrite.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Find an account by its identity key (case-insensitive email).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Insert a new account. Fails with a conflict on duplicate identity.
    async fn insert(&self, account: NewAccount) -> AppResult<Account>;
}

/// Package persistence.
#[async_trait]
pub trait PackageStore: Send + Sync + 'static {
    /// Find a package by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>>;

    /// List every package (admin view).
    async fn list_all(&self) -> AppResult<Vec<Package>>;

    /// List packages sent by the given identity (client view).
    async fn list_by_sender(&self, email: &str) -> AppResult<Vec<Package>>;

    /// List packages on routes assigned to the given driver (driver view).
    async fn list_by_driver(&self, email: &str) -> AppResult<Vec<Package>>;

    /// Register a new package and return it with its tracking code.
    async fn insert(&self, package: NewPackage) -> AppResult<Package>;

    /// Update a package's delivery status. Returns `None` if the package
    /// does not exist.
    async fn update_status(&self, id: Uuid, status: PackageStatus) -> AppResult<Option<Package>>;
}

/// Delivery route persistence.
#[async_trait]
pub trait RouteStore: Send + Sync + 'static {
    /// List all routes.
    async fn list_all(&self) -> AppResult<Vec<DeliveryRoute>>;

    /// Assign a driver to a route. Returns `None` if the route does not
    /// exist.
    async fn assign_driver(&self, id: Uuid, driver_email: &str)
    -> AppResult<Option<DeliveryRoute>>;
}

/// Generate a human-facing tracking code for a new package.
pub(crate) fn tracking_code() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    format!("ST-{}", raw[..10].to_uppercase())
}
