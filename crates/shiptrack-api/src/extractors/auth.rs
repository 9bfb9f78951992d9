//! Extractor for the verified session claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use shiptrack_auth::Claims;
use shiptrack_core::error::AppError;

use crate::error::ApiError;

/// Verified session claims for the current request.
///
/// The authorization middleware verifies the bearer token and inserts
/// the decoded [`Claims`] into the request extensions; this extractor
/// reads them back out. A handler taking `CurrentUser` on a route that
/// is not behind the middleware gets a 401, never a panic.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError(AppError::unauthorized("Authentication required")))
    }
}
