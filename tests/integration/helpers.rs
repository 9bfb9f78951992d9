//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use shiptrack_api::{AppState, build_router};
use shiptrack_auth::{AuthService, PasswordHasher, TokenCodec};
use shiptrack_core::config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use shiptrack_database::memory::{MemoryCredentialStore, MemoryPackageStore, MemoryRouteStore};
use shiptrack_database::store::{PackageStore, RouteStore};

pub const TEST_SIGNING_KEY: &str = "integration-test-signing-key";

/// Test application context backed by in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle on the package store for seeding
    pub packages: Arc<MemoryPackageStore>,
    /// Direct handle on the route store for seeding
    pub routes: Arc<MemoryRouteStore>,
    /// Codec sharing the app signing key, for token assertions
    pub token_codec: Arc<TokenCodec>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = test_config();

        let credentials = Arc::new(MemoryCredentialStore::new());
        let packages = Arc::new(MemoryPackageStore::new());
        let routes = Arc::new(MemoryRouteStore::new());

        let token_codec =
            Arc::new(TokenCodec::new(&config.auth).expect("test signing key rejected"));
        let auth_service = Arc::new(AuthService::new(
            credentials,
            PasswordHasher::new(),
            Arc::clone(&token_codec),
            &config.auth,
        ));

        let state = AppState {
            config: Arc::new(config),
            auth_service,
            token_codec: Arc::clone(&token_codec),
            package_store: Arc::clone(&packages) as Arc<dyn PackageStore>,
            route_store: Arc::clone(&routes) as Arc<dyn RouteStore>,
        };

        Self {
            router: build_router(state),
            packages,
            routes,
            token_codec,
        }
    }

    /// Sends a request and returns the status plus the parsed JSON body.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };

        (status, body)
    }

    /// Registers an account through the API.
    pub async fn register(&self, email: &str, password: &str, role: &str) {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/register",
                None,
                Some(json!({
                    "email": email,
                    "name": "Test User",
                    "address": "1 Test Street",
                    "password": password,
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    }

    /// Logs in and returns the session token.
    pub async fn login(&self, email: &str, password: &str, role: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/login",
                None,
                Some(json!({
                    "email": email,
                    "password": password,
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"]
            .as_str()
            .expect("login response has no token")
            .to_string()
    }

    /// Registers and logs in, returning the session token.
    pub async fn login_as(&self, email: &str, role: &str) -> String {
        self.register(email, "password123", role).await;
        self.login(email, "password123", role).await
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            connect_timeout_seconds: 1,
        },
        auth: AuthConfig {
            signing_key: TEST_SIGNING_KEY.to_string(),
            token_ttl_hours: 1,
            password_min_length: 8,
        },
        logging: LoggingConfig::default(),
    }
}
