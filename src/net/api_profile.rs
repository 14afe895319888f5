//! Profile management endpoints: update, password change, avatar.

#[cfg(test)]
#[path = "api_profile_test.rs"]
mod api_profile_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::net::http::{self, RequestDescriptor};
use crate::net::types::User;
use crate::state::session::SessionState;

pub(crate) const PROFILE_UPDATE_PATH: &str = "/api/auth/profile/update/";
pub(crate) const CHANGE_PASSWORD_PATH: &str = "/api/auth/profile/change-password/";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const UPLOAD_AVATAR_PATH: &str = "/api/auth/profile/upload-avatar/";
pub(crate) const REMOVE_AVATAR_PATH: &str = "/api/auth/profile/remove-avatar/";

/// Editable profile fields.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub bio: String,
}

pub(crate) fn change_password_payload(old: &str, new: &str) -> serde_json::Value {
    serde_json::json!({
        "old_password": old,
        "new_password": new,
    })
}

/// Update email and bio via `PUT /api/auth/profile/update/`.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    update: &ProfileUpdate,
) -> Result<User, ApiError> {
    let payload = serde_json::to_value(update).map_err(|e| ApiError::Network(e.to_string()))?;
    http::send(session, RequestDescriptor::put(PROFILE_UPDATE_PATH, payload)).await
}

/// Change the account password.
///
/// # Errors
///
/// A wrong old password surfaces as `ApiError::Http` with status 400.
pub async fn change_password(
    session: RwSignal<SessionState>,
    old: &str,
    new: &str,
) -> Result<(), ApiError> {
    http::send_unit(
        session,
        RequestDescriptor::post(CHANGE_PASSWORD_PATH, change_password_payload(old, new)),
    )
    .await
}

/// Upload a new avatar image as multipart form data. Browser only.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(
    session: RwSignal<SessionState>,
    file: &web_sys::File,
) -> Result<User, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| {
        ApiError::Network("could not build multipart form".to_owned())
    })?;
    form.append_with_blob_and_filename("avatar", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach avatar".to_owned()))?;
    http::send_multipart(session, UPLOAD_AVATAR_PATH, form).await
}

/// Remove the current avatar.
///
/// # Errors
///
/// Returns the underlying `ApiError` on failure.
pub async fn remove_avatar(session: RwSignal<SessionState>) -> Result<(), ApiError> {
    http::send_unit(session, RequestDescriptor::delete(REMOVE_AVATAR_PATH)).await
}
