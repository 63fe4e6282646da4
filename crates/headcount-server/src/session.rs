//! Cookie-based session handling.
//!
//! A visitor without a `sessionID` cookie gets a fresh random one and the
//! contact store is reset, so every new session starts from an empty list.

use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "sessionID";
/// Cookie lifetime in seconds.
pub const SESSION_MAX_AGE_SECS: u64 = 6000;
/// Random bytes per session token, before encoding.
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Returns the value of the `sessionID` cookie, if the request carries one.
pub fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

/// Generates `len` random bytes from the OS and encodes them URL-safe base64.
pub fn generate_session_token(len: usize) -> Result<String, rand::Error> {
    let mut bytes = vec![0u8; len];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(URL_SAFE.encode(bytes))
}

/// `Set-Cookie` value for a new session token.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Max-Age={SESSION_MAX_AGE_SECS}; Path=/; HttpOnly")
}

/// Middleware for page routes: issues a session cookie and resets the store
/// when the request has none.
pub async fn ensure_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if session_id(request.headers()).is_some() {
        return next.run(request).await;
    }

    let token = match generate_session_token(SESSION_TOKEN_BYTES) {
        Ok(token) => token,
        Err(err) => {
            tracing::error!(error = %err, "failed to generate session token");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let cookie = match HeaderValue::from_str(&session_cookie(&token)) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "session cookie is not a valid header value");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    state.contacts.reset();
    tracing::info!("new session issued, contact store reset");

    let mut response = next.run(request).await;
    response.headers_mut().append(SET_COOKIE, cookie);
    response
}
