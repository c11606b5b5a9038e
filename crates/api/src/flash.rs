//! Flash message plumbing.
//!
//! A flash message survives exactly one redirect: the message body lives
//! in the `flash_messages` table, and the client carries only an opaque
//! uuid token in a short-lived cookie. Popping the message deletes the
//! row, so it can never be shown twice.

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};
use sigcolle_db::repositories::FlashRepo;
use sigcolle_db::DbPool;
use uuid::Uuid;

use crate::cookies::cookie_value;
use crate::error::{AppError, AppResult};

/// Cookie carrying the flash token across the redirect.
pub const FLASH_COOKIE: &str = "flash";

/// Read the flash token from the request, if one is present and well-formed.
pub fn flash_token(headers: &HeaderMap) -> Option<Uuid> {
    cookie_value(headers, FLASH_COOKIE).and_then(|raw| raw.parse().ok())
}

/// Consume the flash message referenced by the request, if any.
pub async fn pop_flash(pool: &DbPool, headers: &HeaderMap) -> Result<Option<String>, sqlx::Error> {
    match flash_token(headers) {
        Some(token) => FlashRepo::take(pool, token).await,
        None => Ok(None),
    }
}

/// Build a 303 redirect carrying `message` as a one-shot flash value.
///
/// The message is stored server-side first; the response only sets the
/// token cookie.
pub async fn redirect_with_flash(
    pool: &DbPool,
    location: &str,
    message: &str,
) -> AppResult<Response> {
    let flash = FlashRepo::push(pool, message).await?;

    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age=300",
        flash.token
    );
    let cookie = HeaderValue::from_str(&cookie)
        .map_err(|err| AppError::InternalError(format!("Invalid flash cookie: {err}")))?;

    let mut response = Redirect::to(location).into_response();
    response.headers_mut().append(SET_COOKIE, cookie);
    Ok(response)
}

/// `Set-Cookie` value that removes the flash cookie after it was read.
pub fn clear_flash_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; HttpOnly; Max-Age=0")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    #[test]
    fn token_is_parsed_from_cookie() {
        let token = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.append(
            COOKIE,
            HeaderValue::from_str(&format!("flash={token}")).unwrap(),
        );
        assert_eq!(flash_token(&headers), Some(token));
    }

    #[test]
    fn malformed_token_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("flash=not-a-uuid"));
        assert_eq!(flash_token(&headers), None);
    }

    #[test]
    fn absent_cookie_is_none() {
        assert_eq!(flash_token(&HeaderMap::new()), None);
    }
}
