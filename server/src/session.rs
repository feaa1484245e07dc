//! Session management for the admin dashboard.
//!
//! ARCHITECTURE
//! ============
//! The store is the single source of truth for "who is logged in". It is
//! constructed once in `main` and injected through `AppState`; nothing else
//! mutates session state. Each entry maps a locally issued session token
//! (the value carried by the browser cookie) to the backend bearer token
//! and the derived admin identity, so the request-time route guard and the
//! in-process session both trace to the same authority.
//!
//! TRADE-OFFS
//! ==========
//! All mutations are serialized through one async mutex. A `logout` racing
//! a `login` therefore resolves in lock-acquisition order instead of
//! leaving the store half-updated; token and user always change together.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use gateway::{CommerceApi, GatewayError};
use rand::Rng;
use tokio::sync::Mutex;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex session token.
#[must_use]
pub fn generate_session_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Identity of the logged-in admin as exposed to screens.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
}

/// One authenticated session: the backend bearer token plus the identity
/// derived from it. Overwritten, never appended, on each login.
#[derive(Debug, Clone)]
pub struct Session {
    pub bearer: String,
    pub user: SessionUser,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the backend token and synthesized identity are stored
    /// atomically under a fresh session token, replacing `previous` if the
    /// browser was already holding one. Invalid credentials yield
    /// `Ok(None)` and leave existing state untouched.
    ///
    /// # Errors
    ///
    /// Transport and backend failures other than rejected credentials
    /// propagate to the caller.
    pub async fn login(
        &self,
        api: &dyn CommerceApi,
        email: &str,
        password: &str,
        previous: Option<&str>,
    ) -> Result<Option<(String, SessionUser)>, GatewayError> {
        let resp = match api.login(email, password).await {
            Ok(resp) => resp,
            Err(GatewayError::AuthExpired) => return Ok(None),
            Err(e) => return Err(e),
        };
        if resp.token.is_empty() {
            return Ok(None);
        }

        // The backend returns only a token on login; the profile is
        // synthesized locally and refreshed on the next validation.
        let user = synthesized_identity(email);
        let token = generate_session_token();

        let mut sessions = self.inner.lock().await;
        if let Some(previous) = previous {
            sessions.remove(previous);
        }
        sessions.insert(token.clone(), Session { bearer: resp.token, user: user.clone() });
        Ok(Some((token, user)))
    }

    /// End a session. The remote logout is best effort; local state is
    /// cleared regardless of the remote call's outcome.
    pub async fn logout(&self, api: &dyn CommerceApi, token: &str) {
        let bearer = self.inner.lock().await.get(token).map(|s| s.bearer.clone());
        if let Some(bearer) = bearer {
            if let Err(e) = api.logout(&bearer).await {
                tracing::warn!(error = %e, "remote logout failed; clearing session anyway");
            }
        }
        self.inner.lock().await.remove(token);
    }

    /// Validate a resumed session against the backend's current-user
    /// resource, refreshing the stored identity on success. Any failure
    /// (network error, expired credential) removes the session.
    pub async fn resume(&self, api: &dyn CommerceApi, token: &str) -> Option<SessionUser> {
        let bearer = self.inner.lock().await.get(token).map(|s| s.bearer.clone())?;

        match api.me(&bearer).await {
            Ok(profile) => {
                let user = SessionUser {
                    id: profile.id,
                    email: profile.email,
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    role: profile.role.unwrap_or_else(|| "admin".to_owned()),
                };
                let mut sessions = self.inner.lock().await;
                let session = sessions.get_mut(token)?;
                session.user = user.clone();
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "session validation failed; clearing session");
                self.inner.lock().await.remove(token);
                None
            }
        }
    }

    /// Presence lookup used by request handlers; no remote round trip.
    pub async fn validate(&self, token: &str) -> Option<Session> {
        self.inner.lock().await.get(token).cloned()
    }

    /// Remove a session after the backend rejected its bearer token.
    pub async fn expire(&self, token: &str) {
        self.inner.lock().await.remove(token);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn synthesized_identity(email: &str) -> SessionUser {
    SessionUser {
        id: "user_admin".to_owned(),
        email: email.to_owned(),
        first_name: Some("Admin".to_owned()),
        last_name: Some("User".to_owned()),
        role: "admin".to_owned(),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
