//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and by every outgoing request; mutated only by
//! login, logout, profile fetch, and the 401 teardown in `net::http`.
//! Held in an `RwSignal<SessionState>` provided via context and passed
//! into the flows below explicitly.
//!
//! A 401 anywhere raises `auth_expired_seq`; `app::App` watches the
//! counter and navigates to the login route, so transport code never
//! touches the router directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::RwSignal;

use crate::net::api_auth;
use crate::net::error::ApiError;
use crate::net::types::{TokenPair, User};
use crate::util::storage;

/// Login form credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Session state: the bearer token, the fetched profile, and bookkeeping.
///
/// Invariant: `user` is only ever populated while `token` is non-empty.
/// The reverse is a valid transient state — a token restored from storage
/// whose profile has not been fetched yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// JWT access token; empty string means unauthenticated.
    pub token: String,
    /// JWT refresh token; in-memory only, never persisted.
    pub refresh: String,
    pub user: Option<User>,
    /// True while the initial profile fetch is in flight.
    pub loading: bool,
    /// Bumped once per 401 response. Watched by the app shell, which
    /// redirects to the login route when it rises.
    pub auth_expired_seq: u64,
}

impl SessionState {
    /// Session at app start: token restored from storage, profile not yet
    /// fetched.
    pub fn restore(stored_token: Option<String>) -> Self {
        Self {
            token: stored_token.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn set_tokens(&mut self, pair: &TokenPair) {
        self.token = pair.access.clone();
        self.refresh = pair.refresh.clone();
    }

    pub fn set_access(&mut self, access: &str) {
        self.token = access.to_owned();
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop token, refresh token, and profile. Idempotent.
    pub fn clear_auth(&mut self) {
        self.token.clear();
        self.refresh.clear();
        self.user = None;
    }

    /// Session teardown for a 401 response: clear credentials and signal
    /// the expiry to the app shell. Called at most once per response.
    pub fn note_auth_expired(&mut self) {
        self.clear_auth();
        self.auth_expired_seq += 1;
    }
}

/// Extract a human-readable rejection reason from a login error body.
///
/// The token endpoint answers `{"detail": ...}`, the legacy login view
/// `{"error": ...}`; fall back to a generic message for anything else.
pub(crate) fn credential_rejected_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "error"] {
            if let Some(reason) = value.get(key).and_then(|v| v.as_str()) {
                return reason.to_owned();
            }
        }
    }
    "invalid username or password".to_owned()
}

/// Exchange credentials for a token pair, persist the access token, then
/// fetch the profile with it.
///
/// Two-step flow: `POST /api/token/` followed by `GET /api/auth/profile/`.
/// The session holds a token but no user between the two steps.
///
/// # Errors
///
/// `ApiError::Auth` when the credentials are rejected; any other
/// `ApiError` from the underlying calls is passed through.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: &Credentials,
) -> Result<(), ApiError> {
    use leptos::prelude::Update;

    let pair = match api_auth::obtain_token(session, credentials).await {
        Ok(pair) => pair,
        Err(ApiError::Http {
            status: 400 | 401,
            body,
        }) => return Err(ApiError::Auth(credential_rejected_message(&body))),
        Err(e) => return Err(e),
    };
    session.update(|s| s.set_tokens(&pair));
    storage::persist_token(&pair.access);
    fetch_profile(session).await
}

/// Fetch and store the profile for the current token.
///
/// Succeeds trivially when no token is set. A 401 from the profile
/// endpoint tears the session down inside `net::http` before the error
/// reaches the caller.
///
/// # Errors
///
/// Propagates any `ApiError` from the profile request.
pub async fn fetch_profile(session: RwSignal<SessionState>) -> Result<(), ApiError> {
    use leptos::prelude::{GetUntracked, Update};

    if !session.get_untracked().is_authenticated() {
        return Ok(());
    }
    session.update(|s| s.loading = true);
    let result = api_auth::get_profile(session).await;
    session.update(|s| s.loading = false);
    let user = result?;
    session.update(|s| s.set_user(user));
    Ok(())
}

/// Log out: best-effort backend notification, then clear in-memory and
/// persisted credentials. Idempotent; never fails.
pub async fn logout(session: RwSignal<SessionState>) {
    use leptos::prelude::{GetUntracked, Update};

    if session.get_untracked().is_authenticated() {
        // JWT logout is client-side; the backend call is informational only.
        let _ = api_auth::logout_request(session).await;
    }
    session.update(SessionState::clear_auth);
    storage::clear_token();
}

/// Trade the in-memory refresh token for a new access token and persist it.
///
/// # Errors
///
/// `ApiError::Auth` when no refresh token is held; otherwise whatever the
/// refresh endpoint returns.
pub async fn refresh_access(session: RwSignal<SessionState>) -> Result<(), ApiError> {
    use leptos::prelude::{GetUntracked, Update};

    let refresh = session.get_untracked().refresh;
    if refresh.is_empty() {
        return Err(ApiError::Auth("no refresh token held".to_owned()));
    }
    let renewed = api_auth::refresh_token(session, &refresh).await?;
    session.update(|s| s.set_access(&renewed.access));
    storage::persist_token(&renewed.access);
    Ok(())
}
