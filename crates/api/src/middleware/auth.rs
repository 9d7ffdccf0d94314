//! Bearer-token extractor guarding every todo endpoint.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tasknote_core::error::CoreError;

use crate::error::{ApiError, AppError};
use crate::state::AppState;

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Requests that fail validation are rejected here, before
/// any handler or service code runs:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> ApiResult<Json<()>> {
///     tracing::info!(subject = %user.subject, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Subject claim of the validated token.
    pub subject: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Nested routers strip their prefix from `parts.uri`; the rejection
        // envelope must carry the URL the client actually requested.
        let uri = parts
            .extensions
            .get::<axum::extract::OriginalUri>()
            .map(|original| original.0.clone())
            .unwrap_or_else(|| parts.uri.clone());

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
                .at(&uri)
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
            .at(&uri)
        })?;

        let claims = state
            .authenticator
            .authenticate(token)
            .await
            .map_err(|err| AppError::Core(err).at(&uri))?;

        Ok(AuthUser {
            subject: claims.sub,
        })
    }
}
