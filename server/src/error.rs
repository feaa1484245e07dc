//! Request-level error mapping.
//!
//! DESIGN
//! ======
//! The gateway reports failures as typed results; this module is the
//! orchestration layer that turns them into HTTP responses and decides
//! navigation policy. An expired session clears the token cookie in the
//! response and tells the client where to go — the transport layer below
//! never redirects on its own.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use gateway::GatewayError;
use serde_json::json;

use crate::guard::LOGIN_PATH;
use crate::routes::auth::clear_session_cookie;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const BACKEND_UNREACHABLE: &str = "Unable to reach the commerce backend.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No session token accompanied the request.
    #[error("authentication required")]
    Unauthorized,
    /// The backend rejected the session's bearer token.
    #[error("session expired")]
    AuthExpired,
    /// The login credentials were rejected.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The request body or parameters were rejected before reaching the backend.
    #[error("{0}")]
    Validation(String),
    /// Everything the gateway reported other than auth expiry.
    #[error(transparent)]
    Gateway(GatewayError),
}

impl AppError {
    /// Normalize a gateway failure; `AuthExpired` gets its own variant so
    /// the response can clear the cookie and point at the login screen.
    #[must_use]
    pub fn from_gateway(err: GatewayError) -> Self {
        if err.is_auth_expired() { Self::AuthExpired } else { Self::Gateway(err) }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Authentication required" })))
                    .into_response()
            }
            Self::AuthExpired => {
                let jar = CookieJar::new().add(clear_session_cookie());
                (
                    StatusCode::UNAUTHORIZED,
                    jar,
                    Json(json!({ "message": SESSION_EXPIRED, "redirect": LOGIN_PATH })),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "message": INVALID_CREDENTIALS })))
                    .into_response()
            }
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            Self::Gateway(err) => gateway_response(&err),
        }
    }
}

fn gateway_response(err: &GatewayError) -> Response {
    match err {
        GatewayError::Transport(_) => {
            (StatusCode::BAD_GATEWAY, Json(json!({ "message": BACKEND_UNREACHABLE })))
                .into_response()
        }
        GatewayError::Validation { message } => {
            (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
        }
        GatewayError::NotFound { message } => {
            (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
        }
        GatewayError::Api { status, message } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "message": message }))).into_response()
        }
        GatewayError::Decode(detail) => {
            (StatusCode::BAD_GATEWAY, Json(json!({ "message": format!("invalid backend response: {detail}") })))
                .into_response()
        }
        // Normalized to AppError::AuthExpired by from_gateway; kept total anyway.
        GatewayError::AuthExpired => {
            (StatusCode::UNAUTHORIZED, Json(json!({ "message": SESSION_EXPIRED }))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
