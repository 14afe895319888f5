//! Auth endpoints: token obtain/refresh, register, logout, profile fetch.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::net::http::{self, RequestDescriptor};
use crate::net::types::{AccessToken, RegisterResponse, TokenPair, User};
use crate::state::session::{Credentials, SessionState};

pub(crate) const TOKEN_PATH: &str = "/api/token/";
pub(crate) const TOKEN_REFRESH_PATH: &str = "/api/token/refresh/";
pub(crate) const REGISTER_PATH: &str = "/api/auth/register/";
pub(crate) const LOGOUT_PATH: &str = "/api/auth/logout/";
pub(crate) const PROFILE_PATH: &str = "/api/auth/profile/";

pub(crate) fn token_payload(credentials: &Credentials) -> serde_json::Value {
    serde_json::json!({
        "username": credentials.username,
        "password": credentials.password,
    })
}

/// Outbound payload for registration; the backend echoes the created user.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Exchange credentials for a JWT pair via `POST /api/token/`.
///
/// # Errors
///
/// Rejected credentials surface as `ApiError::Http` with status 400/401;
/// `state::session::login` maps them to `ApiError::Auth`.
pub async fn obtain_token(
    session: RwSignal<SessionState>,
    credentials: &Credentials,
) -> Result<TokenPair, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(TOKEN_PATH, token_payload(credentials)),
    )
    .await
}

/// Trade a refresh token for a new access token via `POST /api/token/refresh/`.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn refresh_token(
    session: RwSignal<SessionState>,
    refresh: &str,
) -> Result<AccessToken, ApiError> {
    http::send(
        session,
        RequestDescriptor::post(TOKEN_REFRESH_PATH, serde_json::json!({ "refresh": refresh })),
    )
    .await
}

/// Create an account via `POST /api/auth/register/`.
///
/// # Errors
///
/// Validation failures surface as `ApiError::Http` with status 400.
pub async fn register(
    session: RwSignal<SessionState>,
    registration: &Registration,
) -> Result<RegisterResponse, ApiError> {
    let payload = serde_json::to_value(registration)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    http::send(session, RequestDescriptor::post(REGISTER_PATH, payload)).await
}

/// Tell the backend the user is logging out via `POST /api/auth/logout/`.
/// JWTs are stateless, so this is informational; the real teardown is the
/// client-side clear in `state::session::logout`.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure; callers may ignore it.
pub async fn logout_request(session: RwSignal<SessionState>) -> Result<serde_json::Value, ApiError> {
    http::send(session, RequestDescriptor::post_empty(LOGOUT_PATH)).await
}

/// Fetch the current user's profile via `GET /api/auth/profile/`.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn get_profile(session: RwSignal<SessionState>) -> Result<User, ApiError> {
    http::send(session, RequestDescriptor::get(PROFILE_PATH)).await
}
