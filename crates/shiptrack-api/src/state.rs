//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use shiptrack_auth::{AuthService, TokenCodec};
use shiptrack_core::config::AppConfig;
use shiptrack_database::store::{PackageStore, RouteStore};

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks. The
/// token codec (and the signing key inside it) is constructed once at
/// startup and injected here — request code never reads ambient
/// configuration.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Authentication service.
    pub auth_service: Arc<AuthService>,
    /// Session token codec used by the authorization middleware.
    pub token_codec: Arc<TokenCodec>,
    /// Package persistence.
    pub package_store: Arc<dyn PackageStore>,
    /// Delivery route persistence.
    pub route_store: Arc<dyn RouteStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}
