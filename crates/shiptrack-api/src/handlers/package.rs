//! Package handlers: creation, listing, lookup, and status updates.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use shiptrack_core::error::AppError;
use shiptrack_entity::{NewPackage, Package, PackageStatus, Role};

use crate::dto::request::{CreatePackageRequest, UpdateStatusRequest};
use crate::error::ApiResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// `GET /api/packages`
///
/// Role-scoped listing: admins see everything, clients see packages
/// they sent, drivers see packages on their routes.
pub async fn list_packages(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
) -> ApiResult<Json<Vec<Package>>> {
    let packages = match claims.role {
        Role::Admin => state.package_store.list_all().await?,
        Role::Client => state.package_store.list_by_sender(&claims.sub).await?,
        Role::Driver => state.package_store.list_by_driver(&claims.sub).await?,
    };
    Ok(Json(packages))
}

/// `GET /api/packages/{id}`
pub async fn get_package(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Package>> {
    let package = state
        .package_store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Package not found"))?;

    match claims.role {
        Role::Admin => {}
        Role::Client if package.sender_email == claims.sub => {}
        Role::Driver => {
            let assigned = state.package_store.list_by_driver(&claims.sub).await?;
            if !assigned.iter().any(|p| p.id == id) {
                return Err(AppError::forbidden("Package is not on your route").into());
            }
        }
        _ => return Err(AppError::forbidden("You do not have access to this package").into()),
    }

    Ok(Json(package))
}

/// `POST /api/packages`
///
/// Registers a package for shipment. The sender is always the
/// authenticated identity.
pub async fn create_package(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Json(request): Json<CreatePackageRequest>,
) -> ApiResult<(StatusCode, Json<Package>)> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let package = state
        .package_store
        .insert(NewPackage {
            sender_email: claims.sub,
            recipient: request.recipient,
            destination: request.destination,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(package)))
}

/// `PUT /api/packages/{id}/status`
///
/// Moves a package to a new status. Clients cannot change status;
/// drivers and admins can.
pub async fn update_status(
    State(state): State<AppState>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Package>> {
    if claims.role == Role::Client {
        return Err(AppError::forbidden("Clients cannot change package status").into());
    }

    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let status: PackageStatus = request.status.parse()?;

    let package = state
        .package_store
        .update_status(id, status)
        .await?
        .ok_or_else(|| AppError::not_found("Package not found"))?;

    Ok(Json(package))
}
