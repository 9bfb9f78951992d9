//! Delivery route handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use shiptrack_core::error::AppError;
use shiptrack_entity::{DeliveryRoute, Role};

use crate::dto::request::AssignDriverRequest;
use crate::error::ApiResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// `GET /api/routes`
pub async fn list_routes(
    State(state): State<AppState>,
    CurrentUser(_claims): CurrentUser,
) -> ApiResult<Json<Vec<DeliveryRoute>>> {
    let routes = state.route_store.list_all().await?;
    Ok(Json(routes))
}

/// `PUT /api/routes/{id}/driver`
///
/// Assigns a driver to a route. Admin only.
pub async fn assign_driver(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignDriverRequest>,
) -> ApiResult<Json<DeliveryRoute>> {
    if !claims.role.is_admin() {
        return Err(AppError::forbidden("Only administrators can assign drivers").into());
    }

    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let route = state
        .route_store
        .assign_driver(id, &request.driver_email)
        .await?
        .ok_or_else(|| AppError::not_found("Route not found"))?;

    Ok(Json(route))
}
