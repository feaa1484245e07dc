//! Typed gateway errors.
//!
//! DESIGN
//! ======
//! Authentication expiry (401) is a first-class variant rather than a side
//! effect buried in the transport layer. Callers pattern-match on
//! `AuthExpired` to clear their session and choose a redirect; the gateway
//! itself never navigates or mutates session state.

/// Failure taxonomy for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Network unreachable or request timed out.
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend rejected the bearer credential (401).
    #[error("authentication expired")]
    AuthExpired,
    /// The backend rejected the request body or parameters (400).
    #[error("validation failed: {message}")]
    Validation { message: String },
    /// The requested resource does not exist (404).
    #[error("not found: {message}")]
    NotFound { message: String },
    /// Any other non-2xx backend response.
    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Map a non-success HTTP status and raw body to a typed error.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 => Self::AuthExpired,
            400 => Self::Validation { message },
            404 => Self::NotFound { message },
            _ => Self::Api { status, message },
        }
    }

    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }
}

/// Pull a human-readable message out of a backend error body.
/// Backend errors carry `{"message": "..."}`; anything else is used verbatim.
fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(serde_json::Value::as_str) {
            return message.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { "no detail".to_owned() } else { trimmed.to_owned() }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
