//! Route table and middleware wiring.

use axum::http::HeaderValue;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::middleware as axum_middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::handlers;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Builds the full application router.
///
/// Public routes (login, register, health) are reachable without a
/// token; everything else sits behind [`require_auth`], which rejects
/// before any handler runs.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/health", get(handlers::health::health_check));

    let protected = Router::new()
        .route("/auth/me", get(handlers::auth::me))
        .route(
            "/packages",
            get(handlers::package::list_packages).post(handlers::package::create_package),
        )
        .route("/packages/{id}", get(handlers::package::get_package))
        .route("/packages/{id}/status", put(handlers::package::update_status))
        .route("/routes", get(handlers::route::list_routes))
        .route("/routes/{id}/driver", put(handlers::route::assign_driver))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .nest("/api", public.merge(protected))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
