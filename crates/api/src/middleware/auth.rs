//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sigcolle_core::error::CoreError;
use sigcolle_core::types::DbId;
use sigcolle_db::repositories::SessionRepo;
use uuid::Uuid;

use crate::cookies::cookie_value;
use crate::error::AppError;
use crate::state::AppState;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "sid";

/// Authenticated principal resolved from the `sid` session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication; the handler then reads the owner id from a typed
/// value instead of fishing it out of an untyped session store:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Html<String>> {
///     tracing::info!(user_id = auth.user_id, "handling request");
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw = cookie_value(&parts.headers, SESSION_COOKIE).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let token: Uuid = raw.parse().map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Malformed session cookie".into()))
        })?;

        let session = SessionRepo::find_active_by_token(&state.pool, token)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(AuthUser {
            user_id: session.user_id,
        })
    }
}
