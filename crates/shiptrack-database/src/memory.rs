//! In-memory store implementations.
//!
//! Used by integration tests and local experiments where a PostgreSQL
//! instance is not available. Behavior mirrors the repository
//! implementations, including the duplicate-identity conflict.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use shiptrack_core::AppResult;
use shiptrack_core::error::AppError;
use shiptrack_entity::{Account, DeliveryRoute, NewAccount, NewPackage, Package, PackageStatus};

use crate::store::{CredentialStore, PackageStore, RouteStore, tracking_code};

/// In-memory credential store keyed by lowercased email.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().expect("lock poisoned");
        Ok(accounts.get(&email.to_lowercase()).cloned())
    }

    async fn insert(&self, account: NewAccount) -> AppResult<Account> {
        let mut accounts = self.accounts.write().expect("lock poisoned");
        let key = account.email.to_lowercase();
        if accounts.contains_key(&key) {
            return Err(AppError::conflict(
                "An account with this email already exists",
            ));
        }

        let record = Account {
            id: Uuid::new_v4(),
            email: account.email,
            name: account.name,
            address: account.address,
            password_hash: account.password_hash,
            role: account.role,
            created_at: Utc::now(),
        };
        accounts.insert(key, record.clone());
        Ok(record)
    }
}

/// In-memory package store.
#[derive(Debug, Default)]
pub struct MemoryPackageStore {
    packages: RwLock<HashMap<Uuid, Package>>,
    /// Route-to-driver assignments, shared with [`MemoryRouteStore`] by
    /// callers that need driver filtering to line up across both stores.
    route_drivers: RwLock<HashMap<Uuid, String>>,
}

impl MemoryPackageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a route-to-driver assignment for driver filtering.
    pub fn set_route_driver(&self, route_id: Uuid, driver_email: &str) {
        self.route_drivers
            .write()
            .expect("lock poisoned")
            .insert(route_id, driver_email.to_lowercase());
    }

    /// Attach an existing package to a route.
    pub fn assign_to_route(&self, package_id: Uuid, route_id: Uuid) {
        if let Some(package) = self
            .packages
            .write()
            .expect("lock poisoned")
            .get_mut(&package_id)
        {
            package.assigned_route = Some(route_id);
        }
    }
}

#[async_trait]
impl PackageStore for MemoryPackageStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>> {
        Ok(self
            .packages
            .read()
            .expect("lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Package>> {
        let mut packages: Vec<_> = self
            .packages
            .read()
            .expect("lock poisoned")
            .values()
            .cloned()
            .collect();
        packages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(packages)
    }

    async fn list_by_sender(&self, email: &str) -> AppResult<Vec<Package>> {
        let email = email.to_lowercase();
        let mut packages: Vec<_> = self
            .packages
            .read()
            .expect("lock poisoned")
            .values()
            .filter(|p| p.sender_email.to_lowercase() == email)
            .cloned()
            .collect();
        packages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(packages)
    }

    async fn list_by_driver(&self, email: &str) -> AppResult<Vec<Package>> {
        let email = email.to_lowercase();
        let drivers = self.route_drivers.read().expect("lock poisoned");
        let mut packages: Vec<_> = self
            .packages
            .read()
            .expect("lock poisoned")
            .values()
            .filter(|p| {
                p.assigned_route
                    .map(|r| drivers.get(&r) == Some(&email))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        packages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(packages)
    }

    async fn insert(&self, package: NewPackage) -> AppResult<Package> {
        let now = Utc::now();
        let record = Package {
            id: Uuid::new_v4(),
            tracking_code: tracking_code(),
            sender_email: package.sender_email,
            recipient: package.recipient,
            destination: package.destination,
            status: PackageStatus::Registered,
            assigned_route: None,
            created_at: now,
            updated_at: now,
        };
        self.packages
            .write()
            .expect("lock poisoned")
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_status(&self, id: Uuid, status: PackageStatus) -> AppResult<Option<Package>> {
        let mut packages = self.packages.write().expect("lock poisoned");
        Ok(packages.get_mut(&id).map(|p| {
            p.status = status;
            p.updated_at = Utc::now();
            p.clone()
        }))
    }
}

/// In-memory route store.
#[derive(Debug, Default)]
pub struct MemoryRouteStore {
    routes: RwLock<HashMap<Uuid, DeliveryRoute>>,
}

impl MemoryRouteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a route directly, returning its ID.
    pub fn seed(&self, name: &str, origin: &str, destination: &str, distance_km: f64) -> Uuid {
        let route = DeliveryRoute {
            id: Uuid::new_v4(),
            name: name.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance_km,
            driver_email: None,
            created_at: Utc::now(),
        };
        let id = route.id;
        self.routes.write().expect("lock poisoned").insert(id, route);
        id
    }
}

#[async_trait]
impl RouteStore for MemoryRouteStore {
    async fn list_all(&self) -> AppResult<Vec<DeliveryRoute>> {
        let mut routes: Vec<_> = self
            .routes
            .read()
            .expect("lock poisoned")
            .values()
            .cloned()
            .collect();
        routes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(routes)
    }

    async fn assign_driver(
        &self,
        id: Uuid,
        driver_email: &str,
    ) -> AppResult<Option<DeliveryRoute>> {
        let mut routes = self.routes.write().expect("lock poisoned");
        Ok(routes.get_mut(&id).map(|r| {
            r.driver_email = Some(driver_email.to_string());
            r.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryCredentialStore::new();
        let account = NewAccount {
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            address: "1 Dock Rd".to_string(),
            password_hash: "hash".to_string(),
            role: "client".to_string(),
        };
        store.insert(account.clone()).await.unwrap();

        let mut dup = account;
        dup.email = "A@X.COM".to_string();
        assert!(store.insert(dup).await.is_err());
    }

    #[tokio::test]
    async fn test_driver_filtering_follows_route_assignment() {
        let store = MemoryPackageStore::new();
        let package = store
            .insert(NewPackage {
                sender_email: "client@x.com".to_string(),
                recipient: "R".to_string(),
                destination: "Harbor".to_string(),
            })
            .await
            .unwrap();

        let route_id = Uuid::new_v4();
        store.set_route_driver(route_id, "driver@x.com");

        assert!(store.list_by_driver("driver@x.com").await.unwrap().is_empty());

        store.assign_to_route(package.id, route_id);
        let assigned = store.list_by_driver("driver@x.com").await.unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].id, package.id);
    }
}
