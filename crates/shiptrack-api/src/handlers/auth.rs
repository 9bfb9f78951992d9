//! Authentication handlers: login, registration, and session identity.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use shiptrack_auth::Registration;
use shiptrack_core::error::AppError;
use shiptrack_entity::Role;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, SessionResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// `POST /api/auth/login`
///
/// Authenticates an identity/secret/claimed-role triple and returns a
/// signed session token. Unknown identity and bad secret both map to
/// 401 with identical bodies; a role mismatch maps to 403.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let claimed_role: Role = request.role.parse()?;

    let authenticated = state
        .auth_service
        .authenticate(&request.email, &request.password, claimed_role)
        .await?;

    Ok(Json(LoginResponse {
        token: authenticated.token,
        role: authenticated.role,
        expires_at: authenticated.expires_at,
        user: UserResponse::from(authenticated.account),
    }))
}

/// `POST /api/auth/register`
///
/// Creates a new account. Duplicate identities return 409.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role: Role = request.role.parse()?;

    let account = state
        .auth_service
        .register(Registration {
            email: request.email,
            name: request.name,
            address: request.address,
            password: request.password,
            role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(account))))
}

/// `GET /api/auth/me`
///
/// Returns the identity from the verified token claims. No store
/// round-trip; the claims were signed at login.
pub async fn me(CurrentUser(claims): CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        email: claims.sub,
        name: claims.name,
        role: claims.role,
    })
}
