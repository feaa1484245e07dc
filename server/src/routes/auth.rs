//! Auth routes — login, logout, session validation.

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;
use time::Duration;

use crate::error::AppError;
use crate::guard::COOKIE_NAME;
use crate::session::{Session, SessionUser};
use crate::state::AppState;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Session cookie carrying the locally issued token; also read by the
/// request-time route guard.
pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .build()
}

pub(crate) fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated session extracted from the token cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthSession {
    pub session: Session,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(AppError::Unauthorized);
        }

        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions
            .validate(token)
            .await
            .ok_or(AppError::Unauthorized)?;

        Ok(Self { session, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

fn user_payload(user: &SessionUser) -> Json<serde_json::Value> {
    Json(json!({ "user": user, "is_authenticated": true }))
}

/// `POST /api/auth/login` — exchange credentials for a session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, AppError> {
    let previous = jar.get(COOKIE_NAME).map(Cookie::value);
    let outcome = state
        .sessions
        .login(state.api.as_ref(), &body.email, &body.password, previous)
        .await
        .map_err(AppError::from_gateway)?;

    match outcome {
        Some((token, user)) => {
            let jar = jar.add(session_cookie(token));
            Ok((jar, user_payload(&user)))
        }
        None => Err(AppError::InvalidCredentials),
    }
}

/// `POST /api/auth/logout` — end the session, clear the cookie.
/// Clears local state even when the remote logout fails.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value) {
        if !token.is_empty() {
            state.sessions.logout(state.api.as_ref(), token).await;
        }
    }

    let jar = CookieJar::new().add(clear_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me` — validate the resumed session against the backend
/// and return the current user.
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = jar
        .get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::Unauthorized)?;

    match state.sessions.resume(state.api.as_ref(), token).await {
        Some(user) => Ok(user_payload(&user)),
        None => Err(AppError::AuthExpired),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
