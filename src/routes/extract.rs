//! Request extractors: the caller's plan, admin authorization, and JSON
//! error wrappers around axum's body, path and query extractors.

use axum::extract::{FromRef, FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Json;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};

use crate::error::ApiError;
use crate::services::plans::{Plan, PlanTier};
use crate::state::AppState;

pub const PLAN_HEADER: &str = "x-palette-plan";

// =============================================================================
// PLAN EXTRACTOR
// =============================================================================

/// The plan named by the `x-palette-plan` header, or the configured default.
pub struct CallerPlan(pub Plan);

impl<S> FromRequestParts<S> for CallerPlan
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(raw) = parts.headers.get(PLAN_HEADER) else {
            return Ok(Self(app_state.default_plan.plan()));
        };
        let raw = raw
            .to_str()
            .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "E_UNKNOWN_PLAN", "plan header is not ASCII"))?;
        let tier = raw.parse::<PlanTier>()?;
        Ok(Self(tier.plan()))
    }
}

// =============================================================================
// ADMIN EXTRACTOR
// =============================================================================

/// Proof that the request carried `Authorization: Bearer <ADMIN_TOKEN>`.
pub struct AdminAuth;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// Compare tokens by SHA-256 digest without an early exit, so timing does
/// not depend on where the tokens differ or on their lengths.
fn tokens_match(given: &str, expected: &str) -> bool {
    let given = Sha256::digest(given.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    given.iter().zip(expected.iter()).fold(0u8, |diff, (a, b)| diff | (a ^ b)) == 0
}

impl<S> FromRequestParts<S> for AdminAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.admin_token.as_deref() else {
            return Err(ApiError::new(StatusCode::FORBIDDEN, "E_ADMIN_DISABLED", "admin routes are disabled"));
        };
        match bearer_token(parts) {
            Some(token) if tokens_match(token, expected) => Ok(Self),
            Some(_) => Err(ApiError::new(StatusCode::FORBIDDEN, "E_FORBIDDEN", "invalid admin token")),
            None => Err(ApiError::new(StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", "admin token required")),
        }
    }
}

// =============================================================================
// JSON REJECTIONS
// =============================================================================

/// `Json<T>` whose rejection is an [`ApiError`] (`E_INVALID_BODY`).
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// `Path<T>` whose rejection is an [`ApiError`] (`E_INVALID_PATH`).
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// `Query<T>` whose rejection is an [`ApiError`] (`E_INVALID_QUERY`).
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
