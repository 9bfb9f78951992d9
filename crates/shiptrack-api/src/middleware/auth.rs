//! Token-validating middleware for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use shiptrack_auth::TokenError;
use shiptrack_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Verifies the `Authorization: Bearer` token and injects the decoded
/// claims into the request extensions.
///
/// Every failure short-circuits with 401 before the handler runs —
/// missing header, malformed header, bad signature, and expiry all
/// take the same exit, with the precise cause in the logs only.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request).ok_or_else(|| {
        debug!(path = %request.uri().path(), "Request rejected: missing bearer token");
        unauthorized()
    })?;

    let claims = state.token_codec.verify(&token).map_err(|err| {
        match err {
            TokenError::Expired => {
                debug!(path = %request.uri().path(), "Request rejected: token expired")
            }
            TokenError::Malformed => {
                warn!(path = %request.uri().path(), "Request rejected: token malformed")
            }
        }
        unauthorized()
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    let header = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn unauthorized() -> ApiError {
    ApiError(AppError::unauthorized("Invalid or expired token"))
}
