//! Request-time route guard for the page routes.
//!
//! DESIGN
//! ======
//! The guard runs before any page handler, reading only the request path
//! and the presence of the session-token cookie. It is stateless per
//! request and never validates the token beyond presence — full validation
//! happens in the handlers against the session store. Absent and malformed
//! tokens are treated identically: redirect.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const COOKIE_NAME: &str = "medusa_auth_token";
pub const LOGIN_PATH: &str = "/login";
pub const LANDING_PATH: &str = "/medusa-dashboard";

const PROTECTED_PREFIXES: [&str; 2] = ["/dashboard", "/medusa-dashboard"];

/// What the guard decided for one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    ToLogin,
    ToLanding,
}

/// Rule set, first match wins:
/// 1. protected path, no token, not the login path itself → login
/// 2. login path with a token → landing
/// 3. root path → landing
/// 4. anything else passes through unchanged
#[must_use]
pub fn decide(path: &str, has_token: bool) -> GuardDecision {
    let protected = PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix));
    if protected && !has_token && path != LOGIN_PATH {
        return GuardDecision::ToLogin;
    }
    if path == LOGIN_PATH && has_token {
        return GuardDecision::ToLanding;
    }
    if path == "/" {
        return GuardDecision::ToLanding;
    }
    GuardDecision::Allow
}

pub async fn page_guard(request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let has_token = jar
        .get(COOKIE_NAME)
        .map(Cookie::value)
        .is_some_and(|v| !v.is_empty());

    match decide(request.uri().path(), has_token) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::ToLogin => Redirect::temporary(LOGIN_PATH).into_response(),
        GuardDecision::ToLanding => Redirect::temporary(LANDING_PATH).into_response(),
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
